//! Port adapters

mod generation_adapter;
mod speech_adapter;

pub use generation_adapter::OpenAiGenerationAdapter;
pub use speech_adapter::WhisperSpeechAdapter;
