//! Transcription entity

use serde::{Deserialize, Serialize};

/// Text recognized from one audio payload
///
/// Unrelated to any generation request; produced and discarded within a
/// single call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcription {
    /// The recognized text
    pub text: String,
    /// Detected language code (e.g. "en"), when the provider reports one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Duration of the source audio in milliseconds, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl Transcription {
    /// Create a transcription with just the recognized text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
            duration_ms: None,
        }
    }

    /// Attach the detected language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Attach the audio duration
    pub const fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Whether any text was recognized
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
