//! Error types for BullyGuard

/// Result type alias using BullyGuard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for BullyGuard operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid provider credential/model identifier
    #[error("configuration error: {0}")]
    Config(String),

    /// Provider unreachable, rejected the credential, or returned a
    /// non-success status
    #[error("provider error: {0}")]
    Provider(String),

    /// Client-supplied input failed validation (batch upload path)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Provider call exceeded the configured deadline
    #[error("provider call timed out")]
    Timeout,

    /// Generic internal errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new provider error
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new input validation error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
