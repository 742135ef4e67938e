//! Domain errors for infographic generation.

use thiserror::Error;

/// Message shown to the user when the form fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Enter valid Name, Height, or Weight";

#[derive(Debug, Error)]
pub enum InfographicError {
    /// Empty name, or weight / total height not strictly positive.
    #[error("Enter valid Name, Height, or Weight")]
    InvalidInput,

    /// Dataset parsed but does not describe the expected roster.
    #[error("invalid dataset: {0}")]
    DatasetShape(String),

    #[error("failed to parse dataset: {0}")]
    Dataset(#[from] serde_json::Error),
}

impl InfographicError {
    /// True for errors caused by the submitted form rather than the server.
    pub fn is_user_error(&self) -> bool {
        matches!(self, InfographicError::InvalidInput)
    }
}
