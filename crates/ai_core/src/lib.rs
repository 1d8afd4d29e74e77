//! AI Core - Chat-completion and image-generation client
//!
//! Provides abstractions for text and image generation against an
//! OpenAI-compatible API (`/chat/completions` and `/images/generations`).

pub mod config;
pub mod error;
pub mod openai;
pub mod ports;

pub use config::ProviderConfig;
pub use error::ProviderError;
pub use openai::OpenAiClient;
pub use ports::{ChatRequest, ChatResponse, CompletionClient, ImageClient, ImageRequest, TokenUsage};
