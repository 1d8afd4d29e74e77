//! Generation adapter - Implements CompletionPort and ImagePort using ai_core

use ai_core::{
    ChatRequest, CompletionClient, ImageClient, ImageRequest, OpenAiClient, ProviderConfig,
    ProviderError,
};
use application::error::ApplicationError;
use application::ports::{CompletionPort, ImagePort};
use async_trait::async_trait;
use tracing::instrument;

/// Adapter exposing the OpenAI client through the application ports
#[derive(Debug, Clone)]
pub struct OpenAiGenerationAdapter {
    client: OpenAiClient,
}

impl OpenAiGenerationAdapter {
    /// Create a new generation adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the client fails to initialize.
    pub fn new(config: ProviderConfig) -> Result<Self, ApplicationError> {
        let client = OpenAiClient::new(config)
            .map_err(|e: ProviderError| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map a provider error to an application error
    fn map_error(err: ProviderError) -> ApplicationError {
        match err {
            ProviderError::ConnectionFailed(e) | ProviderError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            ProviderError::AuthenticationFailed(e) => {
                ApplicationError::Provider(format!("Authentication failed: {e}"))
            },
            ProviderError::RateLimited => {
                ApplicationError::Provider("Rate limit exceeded".to_string())
            },
            ProviderError::InvalidResponse(e) => {
                ApplicationError::Provider(format!("Invalid response: {e}"))
            },
            ProviderError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Provider timeout after {ms}ms"))
            },
            ProviderError::ServerError(e) => ApplicationError::Provider(e),
        }
    }
}

#[async_trait]
impl CompletionPort for OpenAiGenerationAdapter {
    #[instrument(skip(self, system, user), fields(user_len = user.len(), max_tokens))]
    async fn complete_with_system(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, ApplicationError> {
        let request = ChatRequest::with_system(system, user).with_max_tokens(max_tokens);
        let response = self
            .client
            .complete(request)
            .await
            .map_err(Self::map_error)?;
        Ok(response.content)
    }

    async fn is_healthy(&self) -> bool {
        self.client.health_check().await.unwrap_or(false)
    }

    fn current_model(&self) -> &str {
        self.client.default_model()
    }
}

#[async_trait]
impl ImagePort for OpenAiGenerationAdapter {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn generate_image(&self, prompt: &str) -> Result<String, ApplicationError> {
        self.client
            .generate_image(ImageRequest::new(prompt))
            .await
            .map_err(Self::map_error)
    }
}
