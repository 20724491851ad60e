use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::now_timestamp;
use crate::models::ModelStats;
use crate::AppState;

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Aggregate {
    pub total_trades: i64,
    pub total_pnl: f64,
    pub today_trades: i64,
    pub today_pnl: f64,
}

impl Aggregate {
    pub fn from_models(models: &[ModelStats]) -> Self {
        models.iter().fold(Self::default(), |mut acc, m| {
            acc.total_trades += m.total_trades;
            acc.total_pnl += m.total_pnl;
            acc.today_trades += m.today_trades;
            acc.today_pnl += m.today_pnl;
            acc
        })
    }
}

#[derive(Serialize)]
pub struct ComparisonResponse {
    pub models: Vec<ModelStats>,
    pub aggregate: Aggregate,
    pub timestamp: String,
}

/// GET /api/comparison — every model side by side, plus totals.
pub async fn comparison(State(state): State<AppState>) -> Json<ComparisonResponse> {
    let models = state.reader.compute_all(&state.config.models).await;
    let aggregate = Aggregate::from_models(&models);

    Json(ComparisonResponse {
        models,
        aggregate,
        timestamp: now_timestamp(),
    })
}
