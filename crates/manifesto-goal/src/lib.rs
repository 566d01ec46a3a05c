//! Manifesto Goal Library
//!
//! This crate provides the goal form that drives a narration: its types,
//! validation, and the prompt templates sent to the text and speech models.
//!
//! # Example
//!
//! ```
//! use manifesto_goal::{narrative_prompt, validate_form, GoalForm};
//!
//! let form = GoalForm::example();
//! assert!(validate_form(&form).is_ok());
//!
//! let prompt = narrative_prompt(&form);
//! assert!(prompt.contains(&form.full_name));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`form`]: The goal form and the six senses
//! - [`prompt`]: Prompt templates and the download file name
//! - [`validation`]: Form validation functions

pub mod error;
pub mod form;
pub mod prompt;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    ErrorCode, GoalError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use form::{GoalForm, Sense};
pub use prompt::{download_file_name, narrative_prompt, speech_prompt};
pub use validation::validate_form;
