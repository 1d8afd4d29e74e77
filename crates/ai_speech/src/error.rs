//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech processing
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to connect to the recognition service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the recognition service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The audio payload was unusable
    #[error("Invalid audio: {0}")]
    InvalidAudio(String),

    /// The recognition call itself failed
    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Timeout during recognition
    #[error("Speech service timeout after {0}ms")]
    Timeout(u64),
}

impl From<reqwest::Error> for SpeechError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SpeechError::Timeout(30000)
        } else if err.is_connect() {
            SpeechError::ConnectionFailed(err.to_string())
        } else {
            SpeechError::RequestFailed(err.to_string())
        }
    }
}
