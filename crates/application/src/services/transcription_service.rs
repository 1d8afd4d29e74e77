//! Transcriber - converts an uploaded audio payload into text

use std::{fmt, sync::Arc};

use domain::Transcription;
use tracing::{debug, instrument, warn};

use crate::{error::ApplicationError, ports::SpeechPort};

/// Service that transcribes uploaded audio via the speech port
///
/// Unlike the content generator, failures here are not degraded: any error
/// during recognition surfaces as a generic server error at the boundary.
pub struct TranscriptionService {
    speech: Arc<dyn SpeechPort>,
}

impl fmt::Debug for TranscriptionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranscriptionService").finish_non_exhaustive()
    }
}

impl TranscriptionService {
    /// Create a new transcription service
    pub fn new(speech: Arc<dyn SpeechPort>) -> Self {
        Self { speech }
    }

    /// Transcribe an uploaded audio payload
    #[instrument(skip(self, audio_data), fields(audio_size = audio_data.len()))]
    pub async fn transcribe(&self, audio_data: Vec<u8>) -> Result<Transcription, ApplicationError> {
        match self.speech.transcribe(audio_data).await {
            Ok(transcription) => {
                debug!(text_len = transcription.text.len(), "Transcription complete");
                Ok(transcription)
            },
            Err(e) => {
                warn!(error = %e, "Error transcribing audio");
                Err(ApplicationError::Internal("Error transcribing audio".to_string()))
            },
        }
    }

    /// Whether the speech backend is reachable
    pub async fn is_available(&self) -> bool {
        self.speech.is_available().await
    }
}
