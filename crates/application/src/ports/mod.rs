//! Port definitions for the application layer

mod completion_port;
mod image_port;
mod speech_port;

pub use completion_port::CompletionPort;
pub use image_port::ImagePort;
pub use speech_port::SpeechPort;

#[cfg(test)]
pub use completion_port::MockCompletionPort;
#[cfg(test)]
pub use image_port::MockImagePort;
#[cfg(test)]
pub use speech_port::MockSpeechPort;
