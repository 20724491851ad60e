use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::AppState;

const INDEX_FILE: &str = "index.html";

/// GET / — the dashboard document, or a hint when it is not on disk.
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.config.dashboard_dir.join(INDEX_FILE);

    match tokio::fs::read(&path).await {
        Ok(body) => ([(CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Dashboard document unavailable");
            Json(json!({ "message": "Dashboard not found. Run from project root." })).into_response()
        }
    }
}
