//! Audio transcription handler

use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::{error::ApiError, state::AppState};

/// Multipart field carrying the audio payload
const AUDIO_FIELD: &str = "audio";

/// Transcription response body
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    /// Recognized text
    pub transcription: String,
}

/// Handle an audio-transcription upload
///
/// Expects a multipart body with an `audio` field holding a WAV payload.
/// A missing field is a client error; everything past that point surfaces
/// as a generic 500 without distinguishing the cause.
#[instrument(skip(state, multipart))]
pub async fn transcribe_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let mut audio_data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some(AUDIO_FIELD) {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Failed to read audio field: {e}")))?;
            audio_data = Some(bytes.to_vec());
            break;
        }
    }

    let Some(audio_data) = audio_data else {
        warn!("Transcription request without an audio field");
        return Err(ApiError::BadRequest("Audio file is required".to_string()));
    };

    let transcription = state.transcription.transcribe(audio_data).await?;

    Ok(Json(TranscribeResponse {
        transcription: transcription.text,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_transcription_key() {
        let resp = TranscribeResponse {
            transcription: "hello world".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"transcription":"hello world"}"#);
    }
}
