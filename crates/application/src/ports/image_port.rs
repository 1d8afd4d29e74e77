//! Image port - Interface for image-generation calls

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for image-generation operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ImagePort: Send + Sync {
    /// Generate one image for the prompt and return its URL
    async fn generate_image(&self, prompt: &str) -> Result<String, ApplicationError>;
}
