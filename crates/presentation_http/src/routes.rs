//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Static pages
        .route("/", get(handlers::pages::home))
        .route("/convert-notes", get(handlers::pages::convert_notes))
        .route("/output-selection", get(handlers::pages::output_selection))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Study-kit API
        .route("/generate-content", post(handlers::content::generate_content))
        .route("/transcribe-audio", post(handlers::transcribe::transcribe_audio))
        // Attach state
        .with_state(state)
}
