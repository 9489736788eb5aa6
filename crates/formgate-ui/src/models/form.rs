//! Home page form state
//!
//! `FormState` moves `Clean` → `Dirty` on the first edit and to `Submitted`
//! on a valid submit, which also clears the field. The submitted flag is
//! sticky until the page is left.

use serde::Serialize;

use crate::dialogs::Notifier;
use crate::error::Result;
use crate::models::validation::Required;

/// The data the form collects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormModel {
    pub name: String,
}

/// Lifecycle phase derived from [`FormState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Clean,
    Dirty,
    Submitted,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clean => write!(f, "Clean"),
            Self::Dirty => write!(f, "Dirty"),
            Self::Submitted => write!(f, "Submitted"),
        }
    }
}

/// An accepted submit: the model as it was and its JSON payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub model: FormModel,
    pub payload: String,
}

impl Submission {
    /// Acknowledgment text shown to the user
    pub fn message(&self) -> String {
        format!("Submitted: {}", self.payload)
    }
}

/// In-memory state of the home page form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    model: FormModel,
    dirty: bool,
    submitted: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.model.name
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Replaces the field value; any edit marks the form dirty
    pub fn edit(&mut self, value: impl Into<String>) {
        self.model.name = value.into();
        self.dirty = true;
    }

    pub fn is_valid(&self) -> bool {
        Required.is_satisfied(&self.model.name)
    }

    pub const fn phase(&self) -> FormPhase {
        match (self.submitted, self.dirty) {
            (true, _) => FormPhase::Submitted,
            (false, true) => FormPhase::Dirty,
            (false, false) => FormPhase::Clean,
        }
    }

    /// Whether the unsaved-changes indicator is shown
    pub const fn has_unsaved_changes(&self) -> bool {
        self.dirty && !self.submitted
    }

    /// Whether leaving the page in-app needs the user's confirmation
    pub const fn blocks_navigation(&self) -> bool {
        self.has_unsaved_changes()
    }

    /// Whether closing or reloading the tab should be intercepted
    pub fn blocks_unload(&self) -> bool {
        !self.submitted && !self.model.name.trim().is_empty()
    }

    /// Clears the field and the dirty flag; the submitted flag is kept
    pub fn reset(&mut self) {
        self.model = FormModel::default();
        self.dirty = false;
    }

    /// Validates and accepts the current value
    ///
    /// On success the form is marked submitted and reset. On failure nothing
    /// changes.
    ///
    /// # Errors
    /// Returns `UiError::Validation` when the field is empty, or
    /// `UiError::Serialization` if the payload cannot be encoded.
    pub fn submit(&mut self, field: &str) -> Result<Submission> {
        Required.check(field, &self.model.name)?;
        let payload = serde_json::to_string(&self.model)?;
        let submission = Submission {
            model: self.model.clone(),
            payload,
        };
        self.submitted = true;
        self.reset();
        tracing::info!(payload = %submission.payload, "form submitted");
        Ok(submission)
    }

    /// [`submit`](Self::submit), then acknowledges the submission through
    /// `notifier`. Invalid submits notify nobody.
    ///
    /// # Errors
    /// Same as [`submit`](Self::submit).
    pub fn submit_with(&mut self, field: &str, notifier: &dyn Notifier) -> Result<Submission> {
        let submission = self.submit(field)?;
        notifier.notify(&submission.message());
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::error::UiError;

    #[test]
    fn test_new_form_is_clean() {
        let state = FormState::new();
        assert_eq!(state.phase(), FormPhase::Clean);
        assert_eq!(state.name(), "");
        assert!(!state.is_valid());
    }

    #[test]
    fn test_edit_marks_dirty() {
        let mut state = FormState::new();
        state.edit("a");
        assert_eq!(state.phase(), FormPhase::Dirty);
        assert!(state.has_unsaved_changes());
    }

    #[test]
    fn test_clearing_field_stays_dirty() {
        let mut state = FormState::new();
        state.edit("a");
        state.edit("");
        assert!(state.is_dirty());
        assert!(!state.is_valid());
    }

    #[test]
    fn test_submit_empty_is_rejected_without_change() {
        let mut state = FormState::new();
        state.edit("");
        let before = state.clone();
        let result = state.submit("name");
        assert!(matches!(result, Err(UiError::Validation { .. })));
        assert_eq!(state, before);
    }

    #[test]
    fn test_submit_serializes_payload_and_resets() {
        let mut state = FormState::new();
        state.edit("Ada");
        let submission = state.submit("name").unwrap();
        assert_eq!(submission.payload, r#"{"name":"Ada"}"#);
        assert_eq!(submission.message(), r#"Submitted: {"name":"Ada"}"#);
        assert_eq!(state.name(), "");
        assert!(!state.is_dirty());
        assert_eq!(state.phase(), FormPhase::Submitted);
    }

    #[test]
    fn test_payload_escapes_quotes() {
        let mut state = FormState::new();
        state.edit(r#"a"b"#);
        let submission = state.submit("name").unwrap();
        assert_eq!(submission.payload, r#"{"name":"a\"b"}"#);
    }

    #[test]
    fn test_unload_block_ignores_whitespace() {
        let mut state = FormState::new();
        state.edit("   ");
        assert!(state.is_dirty());
        assert!(!state.blocks_unload());
        state.edit(" x ");
        assert!(state.blocks_unload());
    }

    #[test]
    fn test_submitted_flag_is_sticky_across_edits() {
        let mut state = FormState::new();
        state.edit("Ada");
        state.submit("name").unwrap();
        state.edit("Grace");
        assert!(state.is_dirty());
        assert!(!state.has_unsaved_changes());
        assert!(!state.blocks_navigation());
        assert!(!state.blocks_unload());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(FormPhase::Clean.to_string(), "Clean");
        assert_eq!(FormPhase::Dirty.to_string(), "Dirty");
        assert_eq!(FormPhase::Submitted.to_string(), "Submitted");
    }
}
