//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for MeetLink
///
/// HTTP status mapping lives in the api crate; every other layer only decides
/// the category and carries the detail text.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MeetLinkError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// No token bundle in the session, or a failed code-for-token exchange
    #[error("Authorization error: {0}")]
    Auth(String),

    /// Provider rejected or failed a resource-creation call (expired token,
    /// quota, 5xx, malformed response)
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for MeetLink operations
pub type Result<T> = std::result::Result<T, MeetLinkError>;
