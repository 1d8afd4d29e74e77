//! Application state shared across handlers

use std::sync::Arc;

use application::{StudyKitService, TranscriptionService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Content-generation service
    pub study_kit: Arc<StudyKitService>,
    /// Audio-transcription service
    pub transcription: Arc<TranscriptionService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
