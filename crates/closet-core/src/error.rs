//! Error Types
//!
//! A single error enum shared by the store implementations and the flows.
//! The view model only ever shows the `Display` form to the user.

use thiserror::Error;

/// Common result type for closet operations
pub type ClosetResult<T> = Result<T, ClosetError>;

#[derive(Debug, Error)]
pub enum ClosetError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remote store error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClosetError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        ClosetError::InvalidInput(msg.into())
    }
}
