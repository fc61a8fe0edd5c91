use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod request_id;

pub use request_id::{request_id_middleware, RequestId};

use crate::controllers::{
    documents::DocumentController, health, tts::TtsController, voices::VoiceController,
};
use crate::domain::session::SpeechSession;
use crate::infrastructure::config::Config;

/// Upload ceiling for documents and JSON bodies
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Build the application router with every route and layer
pub fn create_router(
    session: Arc<SpeechSession>,
    document_controller: Arc<DocumentController>,
    voice_controller: Arc<VoiceController>,
    tts_controller: Arc<TtsController>,
) -> Router {
    let voice_routes = Router::new()
        .route("/api/voices", get(VoiceController::list_voices))
        .with_state(voice_controller);

    let document_routes = Router::new()
        .route("/api/documents/extract", post(DocumentController::extract))
        .with_state(document_controller);

    let tts_routes = Router::new()
        .route("/api/tts/estimate", post(TtsController::estimate))
        .route("/api/tts/convert", post(TtsController::convert))
        .route("/api/tts/preview", post(TtsController::preview))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(session)
        .merge(voice_routes)
        .merge(document_routes)
        .merge(tts_routes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process stops
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
