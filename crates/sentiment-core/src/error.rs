//! Shared error type across sentiment crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Programmer or startup misconfiguration.
    Configuration,
    /// Request body missing required fields or not valid JSON.
    MalformedInput,
    /// Payload too large.
    PayloadTooLarge,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Configuration => "CONFIGURATION",
            ClientCode::MalformedInput => "MALFORMED_INPUT",
            ClientCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SentimentError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("payload too large")]
    PayloadTooLarge,
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl SentimentError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            SentimentError::Configuration(_) => ClientCode::Configuration,
            SentimentError::MalformedInput(_) => ClientCode::MalformedInput,
            SentimentError::PayloadTooLarge => ClientCode::PayloadTooLarge,
            SentimentError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            SentimentError::Internal(_) => ClientCode::Internal,
        }
    }
}
