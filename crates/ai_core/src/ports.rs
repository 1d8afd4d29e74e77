//! Port definitions for the generation provider
//!
//! Defines the traits (ports) that generation adapters must implement.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Request for a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Messages in the conversation
    pub messages: Vec<ChatMessage>,
    /// Model to use (overrides config default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A message in the chat request (OpenAI-compatible format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatRequest {
    /// Create a single-turn user request
    pub fn simple(user_message: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: user_message.into(),
            }],
            model: None,
            max_tokens: None,
        }
    }

    /// Create a request with system prompt
    pub fn with_system(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.into(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.into(),
                },
            ],
            model: None,
            max_tokens: None,
        }
    }

    /// Set the model for this request
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Cap the response length
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Response from a chat completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Generated content
    pub content: String,
    /// Model that generated the response
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
}

/// Token usage statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Request for image generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Prompt describing the image
    pub prompt: String,
    /// Requested size, e.g. "512x512"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Requested quality, e.g. "standard"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

impl ImageRequest {
    /// Create an image request with default size and quality
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: None,
            quality: None,
        }
    }

    /// Set the image size
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Set the image quality
    pub fn with_quality(mut self, quality: impl Into<String>) -> Self {
        self.quality = Some(quality.into());
        self
    }
}

/// Port for chat-completion implementations
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Generate a complete chat response
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;

    /// Check if the provider is reachable
    async fn health_check(&self) -> Result<bool, ProviderError>;

    /// Get the current default chat model
    fn default_model(&self) -> &str;
}

/// Port for image-generation implementations
#[async_trait]
pub trait ImageClient: Send + Sync {
    /// Generate one image and return its URL
    async fn generate_image(&self, request: ImageRequest) -> Result<String, ProviderError>;

    /// Get the current image model
    fn image_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_simple() {
        let req = ChatRequest::simple("Hello");
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.messages[0].role, "user");
        assert_eq!(req.messages[0].content, "Hello");
    }

    #[test]
    fn chat_request_with_system() {
        let req = ChatRequest::with_system("You are a helpful assistant.", "Hi");
        assert_eq!(req.messages.len(), 2);
        assert_eq!(req.messages[0].role, "system");
        assert_eq!(req.messages[1].role, "user");
    }

    #[test]
    fn chat_request_chaining() {
        let req = ChatRequest::simple("Test")
            .with_model("gpt-4o")
            .with_max_tokens(150);
        assert_eq!(req.model, Some("gpt-4o".to_string()));
        assert_eq!(req.max_tokens, Some(150));
    }

    #[test]
    fn chat_request_skips_none_fields() {
        let json = serde_json::to_string(&ChatRequest::simple("Test")).unwrap();
        assert!(!json.contains("model"));
        assert!(!json.contains("max_tokens"));
    }

    #[test]
    fn image_request_builder() {
        let req = ImageRequest::new("a fox")
            .with_size("512x512")
            .with_quality("standard");
        assert_eq!(req.prompt, "a fox");
        assert_eq!(req.size, Some("512x512".to_string()));
        assert_eq!(req.quality, Some("standard".to_string()));
    }

    #[test]
    fn chat_response_with_usage() {
        let resp = ChatResponse {
            content: "Hi".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
        };
        assert_eq!(resp.usage.unwrap().total_tokens, 15);
    }
}
