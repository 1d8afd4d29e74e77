//! Port definitions for speech processing
//!
//! Defines the trait (port) that speech-recognition adapters must implement.

use async_trait::async_trait;
use domain::Transcription;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Port for Speech-to-Text (STT) implementations
///
/// Implementations of this trait convert audio data to text transcriptions.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe audio to text
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the payload is unusable or recognition fails.
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError>;

    /// Check if the STT service is available
    async fn is_available(&self) -> bool;

    /// Get the name of the current STT model
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioFormat;

    /// Mock implementation for testing
    struct MockSpeechToText {
        model: String,
        available: bool,
    }

    #[async_trait]
    impl SpeechToText for MockSpeechToText {
        async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
            if audio.is_empty() {
                return Err(SpeechError::InvalidAudio("empty".to_string()));
            }
            Ok(Transcription::new("Mock transcription"))
        }

        async fn is_available(&self) -> bool {
            self.available
        }

        fn model_name(&self) -> &str {
            &self.model
        }
    }

    #[tokio::test]
    async fn mock_stt_transcribes() {
        let stt = MockSpeechToText {
            model: "mock-whisper".to_string(),
            available: true,
        };

        let audio = AudioData::new(vec![0, 1, 2], AudioFormat::Wav);
        let result = stt.transcribe(audio).await.unwrap();

        assert_eq!(result.text, "Mock transcription");
    }

    #[tokio::test]
    async fn mock_stt_rejects_empty_audio() {
        let stt = MockSpeechToText {
            model: "mock-whisper".to_string(),
            available: true,
        };

        let result = stt.transcribe(AudioData::new(vec![], AudioFormat::Wav)).await;
        assert!(matches!(result, Err(SpeechError::InvalidAudio(_))));
    }

    #[tokio::test]
    async fn mock_stt_availability() {
        let unavailable = MockSpeechToText {
            model: "mock".to_string(),
            available: false,
        };
        assert!(!unavailable.is_available().await);
    }

    #[test]
    fn mock_stt_model_name() {
        let stt = MockSpeechToText {
            model: "whisper-1".to_string(),
            available: true,
        };
        assert_eq!(stt.model_name(), "whisper-1");
    }
}
