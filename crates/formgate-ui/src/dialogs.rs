//! Synchronous user dialogs
//!
//! The guard asks a yes/no question and the form acknowledges a submit.
//! Both go through traits so the logic runs without a browser; the
//! `Browser*` implementations call `window.confirm` / `window.alert`.
//! `App` provides the pair as [`Dialogs`] through Leptos context.

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::error::{Result, UiError};

/// Asks the user a yes/no question and blocks until answered
pub trait ConfirmPrompt {
    /// Returns `true` when the user accepts
    fn confirm(&self, message: &str) -> bool;
}

/// Shows the user a message that needs no answer
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<T: ConfirmPrompt + ?Sized> ConfirmPrompt for Arc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}

pub type SharedPrompt = Arc<dyn ConfirmPrompt + Send + Sync>;
pub type SharedNotifier = Arc<dyn Notifier + Send + Sync>;

/// The dialogs pages talk to the user through
#[derive(Clone)]
pub struct Dialogs {
    pub prompt: SharedPrompt,
    pub notifier: SharedNotifier,
}

impl Dialogs {
    pub fn new(
        prompt: impl ConfirmPrompt + Send + Sync + 'static,
        notifier: impl Notifier + Send + Sync + 'static,
    ) -> Self {
        Self {
            prompt: Arc::new(prompt),
            notifier: Arc::new(notifier),
        }
    }

    /// `window.confirm` and `window.alert`
    pub fn browser() -> Self {
        Self::new(BrowserPrompt, BrowserAlert)
    }
}

impl Default for Dialogs {
    fn default() -> Self {
        Self::browser()
    }
}

impl fmt::Debug for Dialogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialogs").finish_non_exhaustive()
    }
}

/// Installs the dialogs for all descendants
pub fn provide_dialogs(dialogs: Dialogs) {
    provide_context(dialogs);
}

/// Reads the dialogs from context, or the browser ones when none were provided
pub fn use_dialogs() -> Dialogs {
    use_context::<Dialogs>().unwrap_or_default()
}

/// Returns the browser window
///
/// # Errors
/// Returns `UiError::BrowserUnavailable` outside a browser.
pub fn browser_window() -> Result<web_sys::Window> {
    // JS imports panic when called on native targets
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().ok_or_else(|| UiError::BrowserUnavailable("no window".to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Err(UiError::BrowserUnavailable(
            "not running in a browser".to_string(),
        ))
    }
}

/// `window.confirm` backed prompt
///
/// Without a reachable window the answer is `false`, keeping the user where
/// they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl ConfirmPrompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        browser_window()
            .and_then(|w| {
                w.confirm_with_message(message)
                    .map_err(|e| UiError::BrowserUnavailable(format!("{e:?}")))
            })
            .unwrap_or_else(|err| {
                tracing::warn!(%err, "confirm dialog unavailable, staying on page");
                false
            })
    }
}

/// `window.alert` backed notifier
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, message: &str) {
        let shown = browser_window().and_then(|w| {
            w.alert_with_message(message)
                .map_err(|e| UiError::BrowserUnavailable(format!("{e:?}")))
        });
        if let Err(err) = shown {
            tracing::warn!(%err, message, "alert dialog unavailable");
        }
    }
}
