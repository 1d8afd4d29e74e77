//! Whisper-compatible speech recognition provider
//!
//! Posts the uploaded audio as a multipart form to an OpenAI-compatible
//! `/audio/transcriptions` endpoint. The payload is spooled through a
//! temporary file with a provider-compatible extension; the file guard
//! releases the path on every exit path, success or failure.

use std::time::Duration;

use async_trait::async_trait;
use domain::Transcription;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tempfile::NamedTempFile;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::SpeechToText;
use crate::types::AudioData;

/// Speech-to-text provider backed by a Whisper-compatible API
#[derive(Debug, Clone)]
pub struct WhisperProvider {
    client: Client,
    config: SpeechConfig,
}

impl WhisperProvider {
    /// Create a new Whisper provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn stt_url(&self) -> String {
        format!("{}/audio/transcriptions", self.config.base_url)
    }

    /// Spool the audio payload to a transient file with a matching extension
    ///
    /// The returned guard deletes the file when dropped, so cleanup happens
    /// on failure paths too.
    async fn spool_temp_audio(&self, audio: &AudioData) -> Result<NamedTempFile, SpeechError> {
        let suffix = format!(".{}", audio.format().extension());
        let temp_file = NamedTempFile::with_suffix(suffix).map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to create temp file: {e}"))
        })?;

        let mut file = tokio::fs::File::create(temp_file.path()).await.map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to write temp file: {e}"))
        })?;

        file.write_all(audio.as_bytes()).await.map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to write temp file: {e}"))
        })?;

        file.flush().await.map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to flush temp file: {e}"))
        })?;

        Ok(temp_file)
    }
}

/// Whisper transcription response
#[derive(Debug, Deserialize)]
struct WhisperResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    duration: Option<f64>,
}

/// Provider API error response
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    code: Option<String>,
}

#[async_trait]
impl SpeechToText for WhisperProvider {
    #[instrument(skip(self, audio), fields(audio_size = audio.size_bytes(), format = ?audio.format()))]
    async fn transcribe(&self, audio: AudioData) -> Result<Transcription, SpeechError> {
        debug!("Transcribing audio");

        if audio.is_empty() {
            return Err(SpeechError::InvalidAudio("Audio data is empty".to_string()));
        }

        if audio.size_bytes() > self.config.max_audio_bytes {
            return Err(SpeechError::InvalidAudio(format!(
                "Audio payload of {} bytes exceeds the {} byte limit",
                audio.size_bytes(),
                self.config.max_audio_bytes
            )));
        }

        if !audio.format().is_recognition_supported() {
            return Err(SpeechError::InvalidAudio(format!(
                "Audio format {:?} is not supported for recognition",
                audio.format()
            )));
        }

        let filename = audio.filename("audio");
        let mime_type = audio.format().mime_type();

        // The guard keeps the file alive for the duration of the request and
        // removes it on drop, whatever the outcome.
        let temp_file = self.spool_temp_audio(&audio).await?;
        let data = tokio::fs::read(temp_file.path()).await.map_err(|e| {
            SpeechError::TranscriptionFailed(format!("Failed to read temp file: {e}"))
        })?;

        let file_part = Part::bytes(data)
            .file_name(filename)
            .mime_str(mime_type)
            .map_err(|e| SpeechError::InvalidAudio(format!("Invalid MIME type: {e}")))?;

        let form = Form::new()
            .part("file", file_part)
            .text("model", self.config.stt_model.clone());

        let response = self
            .client
            .post(self.stt_url())
            .bearer_auth(self.api_key())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Transcription request failed");

            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_body) {
                return match api_error.error.code.as_deref() {
                    Some("rate_limit_exceeded") => Err(SpeechError::RateLimited),
                    _ => Err(SpeechError::TranscriptionFailed(api_error.error.message)),
                };
            }

            return Err(SpeechError::TranscriptionFailed(format!(
                "HTTP {status}: {error_body}"
            )));
        }

        let whisper_response: WhisperResponse = response
            .json()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        debug!(
            text_len = whisper_response.text.len(),
            language = ?whisper_response.language,
            "Transcription complete"
        );

        let mut transcription = Transcription::new(whisper_response.text);

        if let Some(lang) = whisper_response.language {
            transcription = transcription.with_language(lang);
        }

        if let Some(duration) = whisper_response.duration {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let duration_ms = (duration * 1000.0) as u64;
            transcription = transcription.with_duration(duration_ms);
        }

        Ok(transcription)
    }

    async fn is_available(&self) -> bool {
        let models_url = format!("{}/models", self.config.base_url);

        match self
            .client
            .get(&models_url)
            .bearer_auth(self.api_key())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("STT availability check failed: {}", e);
                false
            },
        }
    }

    fn model_name(&self) -> &str {
        &self.config.stt_model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AudioFormat;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(mock_server: &MockServer) -> WhisperProvider {
        let config = SpeechConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: mock_server.uri(),
            ..Default::default()
        };
        WhisperProvider::new(config).unwrap()
    }

    #[tokio::test]
    async fn transcribe_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/audio/transcriptions"))
            .and(header("authorization", "Bearer test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "text": "Hello, world!",
                "language": "en",
                "duration": 2.5
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let audio = AudioData::new(vec![0, 1, 2, 3], AudioFormat::Wav);

        let transcription = provider.transcribe(audio).await.unwrap();

        assert_eq!(transcription.text, "Hello, world!");
        assert_eq!(transcription.language, Some("en".to_string()));
        assert_eq!(transcription.duration_ms, Some(2500));
    }

    #[tokio::test]
    async fn transcribe_empty_audio_fails_before_any_request() {
        let mock_server = MockServer::start().await;
        let provider = create_test_provider(&mock_server);
        let audio = AudioData::new(vec![], AudioFormat::Wav);

        let result = provider.transcribe(audio).await;

        assert!(matches!(result, Err(SpeechError::InvalidAudio(_))));
    }

    #[tokio::test]
    async fn transcribe_oversized_audio_fails() {
        let mock_server = MockServer::start().await;
        let config = SpeechConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: mock_server.uri(),
            max_audio_bytes: 8,
            ..Default::default()
        };
        let provider = WhisperProvider::new(config).unwrap();
        let audio = AudioData::new(vec![0u8; 64], AudioFormat::Wav);

        let result = provider.transcribe(audio).await;

        assert!(matches!(result, Err(SpeechError::InvalidAudio(_))));
    }

    #[tokio::test]
    async fn transcribe_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/audio/transcriptions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": {
                    "message": "Rate limit exceeded",
                    "type": "rate_limit_error",
                    "code": "rate_limit_exceeded"
                }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let audio = AudioData::new(vec![1, 2, 3], AudioFormat::Wav);

        let result = provider.transcribe(audio).await;

        assert!(matches!(result, Err(SpeechError::RateLimited)));
    }

    #[tokio::test]
    async fn transcribe_server_failure_is_transcription_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/audio/transcriptions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        let audio = AudioData::new(vec![1, 2, 3], AudioFormat::Wav);

        let result = provider.transcribe(audio).await;

        assert!(matches!(result, Err(SpeechError::TranscriptionFailed(_))));
    }

    #[tokio::test]
    async fn is_available_reflects_models_endpoint() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
            .mount(&mock_server)
            .await;

        let provider = create_test_provider(&mock_server);
        assert!(provider.is_available().await);
    }

    #[test]
    fn model_name_comes_from_config() {
        let config = SpeechConfig::test();
        let provider = WhisperProvider::new(config).unwrap();
        assert_eq!(provider.model_name(), "whisper-1");
    }

    #[test]
    fn new_fails_without_api_key() {
        let result = WhisperProvider::new(SpeechConfig::default());
        assert!(matches!(result, Err(SpeechError::Configuration(_))));
    }
}
