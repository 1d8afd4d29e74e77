//! OpenAI API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::ports::{
    ChatRequest, ChatResponse, CompletionClient, ImageClient, ImageRequest, TokenUsage,
};

/// Client for an OpenAI-compatible chat and image API
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: ProviderConfig,
}

impl OpenAiClient {
    /// Create a new client
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        config
            .validate()
            .map_err(ProviderError::ConnectionFailed)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ProviderError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> &str {
        self.config.api_key.as_deref().unwrap_or_default()
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn resolve_model<'a>(&'a self, request: &'a ChatRequest) -> &'a str {
        request.model.as_deref().unwrap_or(&self.config.chat_model)
    }

    /// Map a non-success response to a provider error
    async fn error_from_response(response: reqwest::Response) -> ProviderError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Provider request failed");

        if let Ok(api_error) = serde_json::from_str::<ApiError>(&body) {
            return match api_error.error.code.as_deref() {
                Some("rate_limit_exceeded") => ProviderError::RateLimited,
                Some("invalid_api_key") => {
                    ProviderError::AuthenticationFailed(api_error.error.message)
                },
                _ => ProviderError::ServerError(api_error.error.message),
            };
        }

        match status {
            StatusCode::UNAUTHORIZED => ProviderError::AuthenticationFailed(body),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
            _ => ProviderError::ServerError(format!("Status {status}: {body}")),
        }
    }
}

/// OpenAI chat-completions request body
#[derive(Debug, Serialize)]
struct CompletionsRequest<'a> {
    model: &'a str,
    messages: &'a [crate::ports::ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// OpenAI chat-completions response body
#[derive(Debug, Deserialize)]
struct CompletionsResponse {
    model: String,
    choices: Vec<CompletionChoice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// OpenAI image-generations request body
#[derive(Debug, Serialize)]
struct GenerationsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    size: &'a str,
    quality: &'a str,
    n: u8,
}

/// OpenAI image-generations response body
#[derive(Debug, Deserialize)]
struct GenerationsResponse {
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: String,
}

/// OpenAI API error response
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
impl CompletionClient for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %self.resolve_model(&request)))]
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let model = self.resolve_model(&request).to_string();

        let body = CompletionsRequest {
            model: &model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(self.api_key())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let completions: CompletionsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let content = completions
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| {
                ProviderError::InvalidResponse("Response contained no choices".to_string())
            })?;

        let usage = completions.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        debug!(tokens = ?usage, "Chat completion finished");

        Ok(ChatResponse {
            content,
            model: completions.model,
            usage,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, ProviderError> {
        let response = self
            .client
            .get(self.api_url("models"))
            .bearer_auth(self.api_key())
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() || e.is_connect() => Ok(false),
            Err(e) => Err(ProviderError::RequestFailed(e.to_string())),
        }
    }

    fn default_model(&self) -> &str {
        &self.config.chat_model
    }
}

#[async_trait]
impl ImageClient for OpenAiClient {
    #[instrument(skip(self, request), fields(prompt_len = request.prompt.len()))]
    async fn generate_image(&self, request: ImageRequest) -> Result<String, ProviderError> {
        let body = GenerationsRequest {
            model: &self.config.image_model,
            prompt: &request.prompt,
            size: request.size.as_deref().unwrap_or(&self.config.image_size),
            quality: request
                .quality
                .as_deref()
                .unwrap_or(&self.config.image_quality),
            n: 1,
        };

        debug!("Sending image generation request");

        let response = self
            .client
            .post(self.api_url("images/generations"))
            .bearer_auth(self.api_key())
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let generations: GenerationsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        generations
            .data
            .into_iter()
            .next()
            .map(|img| img.url)
            .ok_or_else(|| {
                ProviderError::InvalidResponse("Response contained no images".to_string())
            })
    }

    fn image_model(&self) -> &str {
        &self.config.image_model
    }
}
