//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum HubError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Raised by the model provider or agent engine; displays the raw message
    #[error("{0}")]
    ExternalService(String),
}

impl HubError {
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    pub fn external<T: Into<String>>(message: T) -> Self {
        Self::ExternalService(message.into())
    }
}
