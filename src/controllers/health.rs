use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::domain::session::SpeechSession;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(session): State<Arc<SpeechSession>>) -> impl IntoResponse {
    let catalog = session.catalog();

    if catalog.is_empty() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "region": session.region(),
                "voices": 0
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "region": session.region(),
            "voices": catalog.len(),
            "catalog_fetched_at": catalog.fetched_at()
        })),
    )
}
