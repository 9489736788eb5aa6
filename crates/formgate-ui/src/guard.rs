//! Navigation guard
//!
//! A view may expose a [`Deactivatable`] capability to veto navigation away
//! from it. The [`NavigationGuard`] registry, shared through Leptos context,
//! holds the capability of the view currently on screen; views without one
//! never block.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;

use crate::dialogs::ConfirmPrompt;
use crate::models::FormState;

/// Capability of a view to veto navigation away from it
pub trait Deactivatable {
    /// Returns `true` when leaving the view is allowed
    fn can_deactivate(&self) -> bool;

    /// Called once a navigation away from the view has been allowed
    fn deactivated(&self) {}
}

/// Decides whether navigation may leave the active view
///
/// `None` means the view has no veto capability, so navigation proceeds.
pub fn can_deactivate(active: Option<&dyn Deactivatable>) -> bool {
    active.is_none_or(|view| view.can_deactivate())
}

pub type SharedDeactivatable = Arc<dyn Deactivatable + Send + Sync>;

/// Registry of the active view's veto capability
#[derive(Clone, Default)]
pub struct NavigationGuard {
    active: Arc<Mutex<Option<SharedDeactivatable>>>,
}

impl fmt::Debug for NavigationGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationGuard")
            .field("armed", &self.is_armed())
            .finish()
    }
}

impl NavigationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the capability of the view now on screen
    pub fn register(&self, view: SharedDeactivatable) {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = Some(view);
        tracing::debug!("navigation guard armed");
    }

    /// Removes any installed capability
    pub fn clear(&self) {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = None;
        tracing::debug!("navigation guard cleared");
    }

    pub fn is_armed(&self) -> bool {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    // Cloned out so the prompt never runs under the lock
    fn snapshot(&self) -> Option<SharedDeactivatable> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Asks the active view whether it may be left
    pub fn check(&self) -> bool {
        let active = self.snapshot();
        let allowed = can_deactivate(active.as_deref().map(|v| v as &dyn Deactivatable));
        tracing::debug!(allowed, "navigation guard checked");
        allowed
    }

    /// Decides a navigation from `from` to `to`
    ///
    /// Staying on the same path is not a navigation and never asks. When the
    /// navigation is allowed the active view is told it is being left.
    pub fn leave(&self, from: &str, to: &str) -> bool {
        if from == to {
            return true;
        }
        let active = self.snapshot();
        let allowed = can_deactivate(active.as_deref().map(|v| v as &dyn Deactivatable));
        if allowed {
            if let Some(view) = active {
                view.deactivated();
            }
        }
        tracing::debug!(from, to, allowed, "navigation decided");
        allowed
    }

    /// Decides a history (back/forward) move that already changed the URL
    ///
    /// Returns the path to restore when the active view vetoes.
    pub fn restore_target(&self, from: &str, to: &str) -> Option<String> {
        (!self.leave(from, to)).then(|| from.to_string())
    }
}

/// Creates a guard registry and provides it to descendants
pub fn provide_navigation_guard() -> NavigationGuard {
    let guard = NavigationGuard::new();
    provide_context(guard.clone());
    guard
}

/// Reads the guard registry from context
///
/// Outside an `App` this returns a fresh, unarmed registry.
pub fn use_navigation_guard() -> NavigationGuard {
    use_context::<NavigationGuard>().unwrap_or_default()
}

/// Veto capability of the home page form
///
/// Leaving is allowed unless the form is dirty and unsubmitted; in that case
/// the user decides through `prompt`.
pub struct FormGuard<P> {
    state: RwSignal<FormState>,
    prompt: P,
    message: String,
}

impl<P: ConfirmPrompt> FormGuard<P> {
    pub fn new(state: RwSignal<FormState>, prompt: P, message: impl Into<String>) -> Self {
        Self {
            state,
            prompt,
            message: message.into(),
        }
    }
}

impl<P: ConfirmPrompt> Deactivatable for FormGuard<P> {
    fn can_deactivate(&self) -> bool {
        // A disposed form has nothing left to lose
        let blocks = self
            .state
            .try_with_untracked(FormState::blocks_navigation)
            .unwrap_or(false);
        if !blocks {
            return true;
        }
        let leave = self.prompt.confirm(&self.message);
        tracing::info!(leave, "unsaved changes prompt answered");
        leave
    }

    /// Leaving discards the draft
    fn deactivated(&self) {
        self.state.try_set(FormState::new());
    }
}
