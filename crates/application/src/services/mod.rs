//! Application services

mod study_kit_service;
mod transcription_service;

pub use study_kit_service::StudyKitService;
pub use transcription_service::TranscriptionService;
