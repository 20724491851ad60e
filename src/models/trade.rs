use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of a model's `trades` table, as shown in the recent-trades list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TradeSummary {
    pub market: Option<String>,
    pub side: Option<String>,
    pub size: Option<f64>,
    pub price: Option<f64>,
    pub pnl: Option<f64>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
