//! Concrete speech provider implementations

mod whisper;

pub use whisper::WhisperProvider;
