//! Application configuration
//!
//! Layered: built-in defaults, then an optional `config.toml`, then
//! `STUDYFORGE_*` environment variables. The provider credential is read
//! from the environment at startup and shared between the generation and
//! speech configs when only one is set.

mod server;

use ai_core::ProviderConfig;
use ai_speech::SpeechConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use server::ServerConfig;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat/image generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Speech recognition settings
    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `config.toml`, and environment
    ///
    /// Environment variables use the `STUDYFORGE_` prefix, e.g.
    /// `STUDYFORGE_SERVER_PORT=9000`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("provider.chat_model", "gpt-3.5-turbo")?
            .set_default("provider.image_model", "dall-e-2")?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., STUDYFORGE_SERVER_PORT)
            .add_source(
                config::Environment::with_prefix("STUDYFORGE")
                    .separator("_")
                    .try_parsing(true),
            );

        let mut app_config: Self = builder.build()?.try_deserialize()?;
        app_config.resolve_credentials();
        Ok(app_config)
    }

    /// Fill missing provider credentials from the process environment
    ///
    /// `OPENAI_API_KEY` serves both the generation and speech providers
    /// unless a more specific value was already configured.
    pub fn resolve_credentials(&mut self) {
        if self.provider.api_key.as_deref().unwrap_or_default().is_empty() {
            if let Ok(key) = std::env::var("OPENAI_API_KEY") {
                debug!("Using OPENAI_API_KEY for the generation provider");
                self.provider.api_key = Some(key);
            }
        }

        if self.speech.api_key.as_deref().unwrap_or_default().is_empty() {
            self.speech.api_key = self.provider.api_key.clone();
        }
    }

    /// Validate that the required credential is present
    pub fn validate(&self) -> Result<(), String> {
        self.provider.validate()
    }
}
