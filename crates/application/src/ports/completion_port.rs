//! Completion port - Interface for chat-completion calls

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for chat-completion operations
///
/// One attempt per call; retries and backoff are deliberately out of scope.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionPort: Send + Sync {
    /// Generate a completion for a user prompt under a system instruction
    ///
    /// # Arguments
    /// * `system` - System instruction
    /// * `user` - User prompt
    /// * `max_tokens` - Response length cap
    ///
    /// # Returns
    /// The raw generated text.
    async fn complete_with_system(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
    ) -> Result<String, ApplicationError>;

    /// Check if the completion backend is reachable
    async fn is_healthy(&self) -> bool;

    /// Get the name of the current chat model
    fn current_model(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_completion_port_completes() {
        let mut mock = MockCompletionPort::new();
        mock.expect_complete_with_system()
            .returning(|_, _, _| Ok("Generated text".to_string()));

        let result = mock
            .complete_with_system("You are a helpful assistant.", "Say hi", 150)
            .await
            .unwrap();
        assert_eq!(result, "Generated text");
    }

    #[tokio::test]
    async fn mock_completion_port_fails() {
        let mut mock = MockCompletionPort::new();
        mock.expect_complete_with_system()
            .returning(|_, _, _| Err(ApplicationError::Provider("rate limited".to_string())));

        let result = mock.complete_with_system("sys", "user", 100).await;
        assert!(matches!(result, Err(ApplicationError::Provider(_))));
    }
}
