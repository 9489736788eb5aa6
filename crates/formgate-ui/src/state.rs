//! Application state shared through context
//!
//! The home form's state lives above the router so a home page remounted
//! after a vetoed history move still holds the draft. Approved leaves reset
//! it (see [`FormGuard`](crate::guard::FormGuard)).

use leptos::prelude::*;

use crate::models::FormState;

/// Handle to the home form's state
#[derive(Debug, Clone, Copy)]
pub struct SharedForm(pub RwSignal<FormState>);

/// Creates an empty form state and provides it to descendants
pub fn provide_form_state() -> RwSignal<FormState> {
    let state = RwSignal::new(FormState::new());
    provide_context(SharedForm(state));
    state
}

/// Reads the form state from context
///
/// Outside an `App` every call gets its own fresh state.
pub fn use_form_state() -> RwSignal<FormState> {
    use_context::<SharedForm>().map_or_else(|| RwSignal::new(FormState::new()), |shared| shared.0)
}
