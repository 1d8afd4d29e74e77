//! Configuration for the generation provider

use serde::{Deserialize, Serialize};

/// Configuration for the chat/image generation provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key for the provider
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model used for chat completions
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Model used for image generation
    #[serde(default = "default_image_model")]
    pub image_model: String,

    /// Size of generated images
    #[serde(default = "default_image_size")]
    pub image_size: String,

    /// Quality of generated images
    #[serde(default = "default_image_quality")]
    pub image_quality: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_image_model() -> String {
    "dall-e-2".to_string()
}

fn default_image_size() -> String {
    "512x512".to_string()
}

fn default_image_quality() -> String {
    "standard".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            chat_model: default_chat_model(),
            image_model: default_image_model(),
            image_size: default_image_size(),
            image_quality: default_image_quality(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ProviderConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.as_deref().unwrap_or_default().is_empty() {
            return Err("Provider API key is required".to_string());
        }
        if self.base_url.is_empty() {
            return Err("Provider base URL is required".to_string());
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
