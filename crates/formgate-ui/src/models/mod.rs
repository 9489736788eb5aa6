//! Data models for the home page form

pub mod form;
pub mod validation;

pub use form::{FormModel, FormPhase, FormState, Submission};
pub use validation::Required;
