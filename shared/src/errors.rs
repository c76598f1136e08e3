//! Error types for the calorie engine

use crate::validation::{get_field_display_label, ValidationError};
use thiserror::Error;

/// Errors produced while turning raw form fields into a calculation report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A field is missing or cannot be parsed as the expected number
    #[error("Invalid numeric input provided for {}.", get_field_display_label(.field))]
    MalformedInput { field: String },

    /// A field parsed but falls outside its accepted range
    #[error("{}", .0.message)]
    OutOfRange(ValidationError),

    /// Arithmetic produced something that is not a usable number
    #[error("Internal calculation error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn malformed(field: &str) -> Self {
        EngineError::MalformedInput {
            field: field.to_string(),
        }
    }

    /// Field the error is attributed to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            EngineError::MalformedInput { field } => Some(field),
            EngineError::OutOfRange(err) => Some(&err.field),
            EngineError::Internal(_) => None,
        }
    }

    /// Whether the caller's input is at fault
    pub fn is_user_error(&self) -> bool {
        !matches!(self, EngineError::Internal(_))
    }
}
