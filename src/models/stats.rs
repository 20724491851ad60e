use serde::Serialize;
use sqlx::FromRow;

use crate::errors::ReadFailure;

pub const STATUS_NO_DATA: &str = "No data yet";
pub const STATUS_RUNNING: &str = "Running";

/// Aggregates over a model's closed trades.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ClosedAggregates {
    pub total: i64,
    pub winners: Option<i64>,
    pub losers: Option<i64>,
    pub total_pnl: Option<f64>,
    pub avg_pnl: Option<f64>,
    pub best: Option<f64>,
    pub worst: Option<f64>,
}

/// Closed trades created on the current calendar day.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct TodayAggregates {
    pub trades: i64,
    pub pnl: Option<f64>,
}

/// The most recent trade of a model, any status.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct LastTrade {
    pub market: Option<String>,
    pub pnl: Option<f64>,
    pub time: Option<String>,
    pub status: Option<String>,
}

/// Per-model statistics, recomputed on every request.
#[derive(Debug, Clone, Serialize)]
pub struct ModelStats {
    pub model: String,
    pub status: String,
    pub total_trades: i64,
    pub open_positions: i64,
    pub winners: i64,
    pub losers: i64,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    pub best_trade: f64,
    pub worst_trade: f64,
    pub today_trades: i64,
    pub today_pnl: f64,
    pub last_trade: Option<LastTrade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ReadFailure>,
}

impl ModelStats {
    fn zeroed(model: &str, status: String) -> Self {
        Self {
            model: model.to_string(),
            status,
            total_trades: 0,
            open_positions: 0,
            winners: 0,
            losers: 0,
            win_rate: 0.0,
            total_pnl: 0.0,
            avg_pnl: 0.0,
            best_trade: 0.0,
            worst_trade: 0.0,
            today_trades: 0,
            today_pnl: 0.0,
            last_trade: None,
            error: None,
        }
    }

    /// Stats for a model whose database does not exist yet.
    pub fn no_data(model: &str) -> Self {
        Self::zeroed(model, STATUS_NO_DATA.into())
    }

    /// Zeroed stats carrying the reason the read failed.
    pub fn failed(model: &str, failure: ReadFailure) -> Self {
        let mut stats = Self::zeroed(model, format!("Error: {failure}"));
        stats.error = Some(failure);
        stats
    }

    pub fn from_aggregates(
        model: &str,
        closed: ClosedAggregates,
        open_positions: i64,
        today: TodayAggregates,
        last_trade: Option<LastTrade>,
    ) -> Self {
        let winners = closed.winners.unwrap_or(0);

        Self {
            model: model.to_string(),
            status: STATUS_RUNNING.into(),
            total_trades: closed.total,
            open_positions,
            winners,
            losers: closed.losers.unwrap_or(0),
            win_rate: win_rate(winners, closed.total),
            total_pnl: closed.total_pnl.unwrap_or(0.0),
            avg_pnl: closed.avg_pnl.unwrap_or(0.0),
            best_trade: closed.best.unwrap_or(0.0),
            worst_trade: closed.worst.unwrap_or(0.0),
            today_trades: today.trades,
            today_pnl: today.pnl.unwrap_or(0.0),
            last_trade,
            error: None,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Percentage of winning trades, rounded to two decimals; 0 with no trades.
pub fn win_rate(winners: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let pct = winners as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FailureKind;

    #[test]
    fn win_rate_guards_zero_total() {
        assert_eq!(win_rate(0, 0), 0.0);
        assert_eq!(win_rate(3, 0), 0.0);
    }

    #[test]
    fn win_rate_rounds_to_two_decimals() {
        assert_eq!(win_rate(2, 3), 66.67);
        assert_eq!(win_rate(1, 3), 33.33);
        assert_eq!(win_rate(1, 2), 50.0);
        assert_eq!(win_rate(4, 4), 100.0);
    }

    #[test]
    fn null_aggregates_normalize_to_zero() {
        let stats = ModelStats::from_aggregates(
            "moderate",
            ClosedAggregates::default(),
            2,
            TodayAggregates::default(),
            None,
        );
        assert_eq!(stats.status, STATUS_RUNNING);
        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.winners + stats.losers, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.total_pnl, 0.0);
        assert_eq!(stats.avg_pnl, 0.0);
        assert_eq!(stats.open_positions, 2);
    }

    #[test]
    fn failed_stats_are_zeroed_and_typed() {
        let stats = ModelStats::failed(
            "aggressive",
            ReadFailure::new(FailureKind::Schema, "no such table: trades"),
        );
        assert!(stats.is_failed());
        assert_eq!(stats.status, "Error: schema: no such table: trades");
        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.total_pnl, 0.0);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["error"]["kind"], "schema");
    }

    #[test]
    fn no_data_omits_error_field() {
        let json = serde_json::to_value(ModelStats::no_data("conservative")).unwrap();
        assert_eq!(json["status"], "No data yet");
        assert_eq!(json["today_pnl"], 0.0);
        assert!(json["last_trade"].is_null());
        assert!(json.get("error").is_none());
    }
}
