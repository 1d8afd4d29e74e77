//! Infrastructure layer - Adapters and configuration
//!
//! Binds the `ai_core` and `ai_speech` provider clients to the application
//! ports, and loads the layered application configuration.

pub mod adapters;
pub mod config;

pub use adapters::{OpenAiGenerationAdapter, WhisperSpeechAdapter};
pub use config::{AppConfig, ServerConfig};
