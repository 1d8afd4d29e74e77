//! Speech adapter - Implements SpeechPort using ai_speech

use ai_speech::{AudioData, AudioFormat, SpeechConfig, SpeechError, SpeechToText, WhisperProvider};
use application::error::ApplicationError;
use application::ports::SpeechPort;
use async_trait::async_trait;
use domain::Transcription;
use tracing::instrument;

/// Adapter exposing the Whisper provider through the application speech port
///
/// Uploads arrive as WAV-compatible payloads; the format is fixed here.
#[derive(Debug, Clone)]
pub struct WhisperSpeechAdapter {
    provider: WhisperProvider,
}

impl WhisperSpeechAdapter {
    /// Create a new speech adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = WhisperProvider::new(config)
            .map_err(|e: SpeechError| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { provider })
    }

    /// Map a speech error to an application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::ConnectionFailed(e) | SpeechError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            SpeechError::InvalidAudio(e) => {
                ApplicationError::ExternalService(format!("Invalid audio: {e}"))
            },
            SpeechError::TranscriptionFailed(e) => {
                ApplicationError::ExternalService(format!("Transcription failed: {e}"))
            },
            SpeechError::InvalidResponse(e) => {
                ApplicationError::Internal(format!("Invalid response: {e}"))
            },
            SpeechError::RateLimited => {
                ApplicationError::ExternalService("Rate limit exceeded".to_string())
            },
            SpeechError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Speech service timeout after {ms}ms"))
            },
        }
    }
}

#[async_trait]
impl SpeechPort for WhisperSpeechAdapter {
    #[instrument(skip(self, audio_data), fields(audio_size = audio_data.len()))]
    async fn transcribe(&self, audio_data: Vec<u8>) -> Result<Transcription, ApplicationError> {
        let audio = AudioData::new(audio_data, AudioFormat::Wav);
        self.provider
            .transcribe(audio)
            .await
            .map_err(Self::map_error)
    }

    async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
