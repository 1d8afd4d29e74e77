//! Configuration for speech processing

use serde::{Deserialize, Serialize};

/// Configuration for the speech-recognition service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// API key for the recognition provider
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the recognition API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Speech-to-text model
    #[serde(default = "default_stt_model")]
    pub stt_model: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum accepted audio payload in bytes
    #[serde(default = "default_max_audio_bytes")]
    pub max_audio_bytes: usize,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_stt_model() -> String {
    "whisper-1".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_audio_bytes() -> usize {
    10 * 1024 * 1024 // 10MB
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            stt_model: default_stt_model(),
            timeout_ms: default_timeout_ms(),
            max_audio_bytes: default_max_audio_bytes(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.as_deref().unwrap_or_default().is_empty() {
            return Err("Speech API key is required".to_string());
        }
        Ok(())
    }

    /// Config for tests, pointing at a mock server
    #[doc(hidden)]
    pub fn test() -> Self {
        Self {
            api_key: Some("test-api-key".to_string()),
            ..Default::default()
        }
    }
}
