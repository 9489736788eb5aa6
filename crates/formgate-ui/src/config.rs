//! UI text and form settings
//!
//! `App` provides a [`FormConfig`] through Leptos context; pages read it with
//! [`use_form_config`], falling back to the default outside an `App`.

use leptos::prelude::*;

/// Text and naming used by the home page form and its guards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Name of the single form field, also the key in the submitted payload
    pub field_name: String,
    pub field_label: String,
    pub placeholder: String,
    pub submit_label: String,
    /// Question asked before leaving a form with unsaved edits
    pub leave_message: String,
    /// Indicator shown while the form is dirty and not submitted
    pub unsaved_notice: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            field_name: "name".to_string(),
            field_label: "User name".to_string(),
            placeholder: "User name".to_string(),
            submit_label: "Submit".to_string(),
            leave_message: "There are unsaved changes. Are you sure you want to leave?"
                .to_string(),
            unsaved_notice: "⚠️ Unsaved changes".to_string(),
        }
    }
}

/// Installs the config for all descendants
pub fn provide_form_config(config: FormConfig) {
    provide_context(config);
}

/// Reads the config from context, or the default when none was provided
pub fn use_form_config() -> FormConfig {
    use_context::<FormConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = FormConfig::default();
        assert_eq!(config.field_name, "name");
        assert_eq!(config.field_label, "User name");
        assert_eq!(
            config.leave_message,
            "There are unsaved changes. Are you sure you want to leave?"
        );
        assert!(config.unsaved_notice.contains("Unsaved changes"));
    }

    #[test]
    fn test_use_form_config_without_context_falls_back_to_default() {
        assert_eq!(use_form_config(), FormConfig::default());
    }
}
