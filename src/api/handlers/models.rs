use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use super::now_timestamp;
use crate::errors::ReadFailure;
use crate::models::{ModelStats, TradeSummary};
use crate::services::stats_reader::DEFAULT_RECENT_TRADES;
use crate::AppState;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelStats>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ModelDetail {
    pub stats: ModelStats,
    pub recent_trades: Vec<TradeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_trades_error: Option<ReadFailure>,
    pub timestamp: String,
}

/// GET /api/models — stats for every configured model.
pub async fn list(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = state.reader.compute_all(&state.config.models).await;

    Json(ModelsResponse {
        models,
        timestamp: now_timestamp(),
    })
}

/// GET /api/model/:id — stats plus the latest trades of one model.
///
/// Unknown models get an error body with a 200 status.
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    if !state.config.has_model(&id) {
        return Json(json!({ "error": "Model not found" })).into_response();
    }

    let (stats, trades) = tokio::join!(
        state.reader.compute_stats(&id),
        state.reader.recent_trades(&id, DEFAULT_RECENT_TRADES),
    );

    let (recent_trades, recent_trades_error) = match trades {
        Ok(trades) => (trades, None),
        Err(failure) => (Vec::new(), Some(failure)),
    };

    Json(ModelDetail {
        stats,
        recent_trades,
        recent_trades_error,
        timestamp: now_timestamp(),
    })
    .into_response()
}
