//! Provider errors

use thiserror::Error;

/// Errors raised by the generation provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the provider failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The supplied credential was rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout while waiting for the provider
    #[error("Provider timeout after {0}ms")]
    Timeout(u64),

    /// Provider-side error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout(30000)
        } else if err.is_connect() {
            ProviderError::ConnectionFailed(err.to_string())
        } else {
            ProviderError::RequestFailed(err.to_string())
        }
    }
}
