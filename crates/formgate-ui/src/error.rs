//! Error types for the formgate UI
//!
//! Follows the project's zero-unwrap policy: browser and form failures are
//! values, never panics.

use thiserror::Error;

/// Errors that can occur in the UI layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A form field failed validation
    #[error("Validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },
    /// No browser window/document is reachable (e.g. native test runs)
    #[error("Browser unavailable: {0}")]
    BrowserUnavailable(String),
    /// Form payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Route not found
    #[error("Route not found: {0}")]
    RouteNotFound(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
