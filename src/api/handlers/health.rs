use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::now_timestamp;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models_running: bool,
    pub timestamp: String,
}

/// GET /api/health — always ok; `models_running` mirrors the liveness file.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let models_running = tokio::fs::try_exists(&state.config.liveness_file)
        .await
        .unwrap_or(false);

    Json(HealthResponse {
        status: "ok",
        models_running,
        timestamp: now_timestamp(),
    })
}
