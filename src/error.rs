//! Error types for jotr

use thiserror::Error;

/// Main error type for the jotr application
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode note store: {0}")]
    Encode(#[from] serde_json::Error),
}

impl NotesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotesError::InvalidDate(_) => 2,
            NotesError::Config(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotesError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: jotr list --from 2025-01-01 --to 2025-01-31",
                    input
                )
            }
            NotesError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: storage\n\
                        Example: jotr config storage notes.json",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotesError
pub type Result<T> = std::result::Result<T, NotesError>;
