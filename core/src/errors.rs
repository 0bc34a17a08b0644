use thiserror::Error;

/// Errors surfaced by the BASIX identity client
#[derive(Error, Debug)]
pub enum BasixError {
    /// The identity API rejected a login or registration. The message is
    /// whatever the server sent, or the caller's generic fallback.
    #[error("{0}")]
    AuthFailed(String),

    #[error("Validation Error: {0}")]
    ValidationError(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Request Error: {0}")]
    RequestError(String),

    #[error("Response Error: {0}")]
    ResponseError(String),

    #[error("Storage Error: {0}")]
    StorageError(String),

    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Result type for BASIX client operations
pub type BasixResult<T> = Result<T, BasixError>;
