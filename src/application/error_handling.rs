// src/application/error_handling.rs
//
// Error surfacing for the presentation layer
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses
// - Provides a consistent format for the UI
// - Never exposes internal implementation details

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How the presentation layer should surface an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorSeverity {
    /// Persistent banner; not retried (missing credential)
    Banner,

    /// Inline message in the result area; recoverable
    Inline,

    /// Logged/toast-level warning; the operation still took effect
    Warning,

    /// Unexpected internal failure
    Internal,
}

/// Standard error response for the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub severity: ErrorSeverity,
    pub message: String,
}

impl ErrorResponse {
    pub fn from_app_error(error: &AppError) -> Self {
        let severity = match error {
            AppError::Configuration(_) => ErrorSeverity::Banner,
            AppError::NoResults(_) | AppError::Transport(_) => ErrorSeverity::Inline,
            AppError::Persistence(_) => ErrorSeverity::Warning,
            AppError::Domain(_)
            | AppError::Serialization(_)
            | AppError::Io(_)
            | AppError::Other(_) => ErrorSeverity::Internal,
        };

        Self {
            severity,
            message: error.to_string(),
        }
    }
}
