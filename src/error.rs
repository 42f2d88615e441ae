//! Error types for the pingpong CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::composer::TemplateError;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for content generation.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum PressError {
    /// User provided invalid arguments, config, or input files.
    #[error("{0}")]
    UserError(String),

    /// A topic record is missing a required field or is otherwise malformed.
    #[error("invalid topic data: {0}")]
    DataValidation(String),

    /// The composer broke its own section invariants.
    #[error("composition failed: {0}")]
    Composition(String),

    /// A stage template could not be rendered.
    #[error("template rendering failed: {0}")]
    Template(#[from] TemplateError),

    /// Writing to the output directory failed.
    #[error("output failed: {0}")]
    Io(String),

    /// JSON or YAML encoding failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl PressError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PressError::UserError(_) => exit_codes::USER_ERROR,
            PressError::DataValidation(_) => exit_codes::VALIDATION_FAILURE,
            PressError::Composition(_) => exit_codes::VALIDATION_FAILURE,
            PressError::Template(_) => exit_codes::VALIDATION_FAILURE,
            PressError::Io(_) => exit_codes::IO_FAILURE,
            PressError::Serialization(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for pingpong operations.
pub type Result<T> = std::result::Result<T, PressError>;
