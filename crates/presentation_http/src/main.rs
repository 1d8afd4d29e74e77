//! StudyForge HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{
    StudyKitService, TranscriptionService,
    ports::{CompletionPort, ImagePort, SpeechPort},
};
use infrastructure::{AppConfig, OpenAiGenerationAdapter, WhisperSpeechAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studyforge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("StudyForge v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    config.resolve_credentials();
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        chat_model = %config.provider.chat_model,
        stt_model = %config.speech.stt_model,
        "Configuration loaded"
    );

    // Initialize provider adapters
    let generation = OpenAiGenerationAdapter::new(config.provider.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize generation provider: {e}"))?;
    let generation = Arc::new(generation);

    let speech_adapter = WhisperSpeechAdapter::new(config.speech.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize speech provider: {e}"))?;

    let completion: Arc<dyn CompletionPort> = generation.clone();
    let image: Arc<dyn ImagePort> = generation;
    let speech: Arc<dyn SpeechPort> = Arc::new(speech_adapter);

    // Initialize services
    let study_kit = StudyKitService::new(completion, image);
    let transcription = TranscriptionService::new(speech);

    let state = AppState {
        study_kit: Arc::new(study_kit),
        transcription: Arc::new(transcription),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    // Add middleware (order matters: first added = outermost)
    // The default axum body cap is too small for audio uploads, so the
    // configured limit is enforced by tower-http instead.
    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(axum::extract::DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(
            config.server.max_body_size_audio_bytes,
        ));

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting, this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}
