//! Field validation
//!
//! The form carries a single rule: the field must have a value. A value is
//! present when the input is non-empty; whitespace counts as a value.

use crate::error::{Result, UiError};

/// The "required" rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Required;

impl Required {
    /// Checks `value` for presence, naming `field` in the error
    ///
    /// # Errors
    /// Returns `UiError::Validation` when `value` is empty.
    pub fn check(self, field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            Err(UiError::Validation {
                field: field.to_string(),
                reason: "required".to_string(),
            })
        } else {
            Ok(())
        }
    }

    pub fn is_satisfied(self, value: &str) -> bool {
        !value.is_empty()
    }
}
