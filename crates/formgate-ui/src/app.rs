//! Main application component
//!
//! This module provides the root App component that installs shared context
//! and the router.

use leptos::prelude::*;

use crate::config::{FormConfig, provide_form_config};
use crate::dialogs::{Dialogs, provide_dialogs};
use crate::guard::provide_navigation_guard;
use crate::router::AppRouter;
use crate::state::provide_form_state;

/// Main application component with router integration
///
/// Provides the form config, the dialogs (browser ones unless `dialogs` is
/// given), the navigation guard registry and the form state to every page
/// before the router renders.
#[component]
pub fn App(#[prop(optional)] dialogs: Option<Dialogs>) -> impl IntoView {
    provide_form_config(FormConfig::default());
    provide_dialogs(dialogs.unwrap_or_default());
    provide_navigation_guard();
    provide_form_state();

    view! {
        <div class="app-container">
            <AppRouter />
        </div>
    }
}
