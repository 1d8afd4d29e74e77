//! AI Speech - Speech-to-Text abstractions
//!
//! Provides the `SpeechToText` port and a Whisper-compatible provider
//! implementation.
//!
//! # Architecture
//!
//! This crate follows the ports & adapters pattern:
//! - `ports` module defines the trait (port)
//! - `providers` module contains concrete implementations (adapters)
//!
//! # Example
//!
//! ```ignore
//! use ai_speech::{WhisperProvider, SpeechToText, AudioData, AudioFormat};
//!
//! let provider = WhisperProvider::new(config)?;
//! let audio = AudioData::new(bytes, AudioFormat::Wav);
//! let transcription = provider.transcribe(audio).await?;
//! println!("Transcribed: {}", transcription.text);
//! ```

pub mod config;
pub mod error;
pub mod ports;
pub mod providers;
pub mod types;

pub use config::SpeechConfig;
pub use error::SpeechError;
pub use ports::SpeechToText;
pub use providers::WhisperProvider;
pub use types::{AudioData, AudioFormat};
