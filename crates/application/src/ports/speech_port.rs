//! Speech port - Interface for speech-to-text operations

use async_trait::async_trait;
use domain::Transcription;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech-recognition operations
///
/// The payload is expected to be a WAV-compatible audio upload; format
/// negotiation is the adapter's concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechPort: Send + Sync {
    /// Transcribe raw audio bytes to text
    async fn transcribe(&self, audio_data: Vec<u8>) -> Result<Transcription, ApplicationError>;

    /// Check if the speech service is available
    async fn is_available(&self) -> bool;
}
