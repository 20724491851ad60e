use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use futures_util::future::join_all;
use metrics::counter;
use sqlx::{Connection, SqliteConnection};

use crate::db::{self, stats_repo, trade_repo};
use crate::errors::ReadFailure;
use crate::models::{ModelStats, TradeSummary};

pub const DEFAULT_RECENT_TRADES: i64 = 20;

/// Reads per-model statistics out of the `trades_<model>.db` files.
///
/// Every call opens its own read-only connection and closes it before
/// returning; nothing is pooled or cached between calls.
#[derive(Debug, Clone)]
pub struct StatsReader {
    data_dir: PathBuf,
}

impl StatsReader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn db_path(&self, model: &str) -> PathBuf {
        db::db_path(&self.data_dir, model)
    }

    /// Stats for `model`, with "today" taken from the local calendar.
    pub async fn compute_stats(&self, model: &str) -> ModelStats {
        self.compute_stats_on(model, Local::now().date_naive()).await
    }

    /// Stats for `model`, counting trades created on `today` as today's.
    ///
    /// Never fails: a missing database yields zeroed "No data yet" stats and
    /// any read error is reported inside the returned record.
    pub async fn compute_stats_on(&self, model: &str, today: NaiveDate) -> ModelStats {
        counter!("stats_reads_total", "model" => model.to_string()).increment(1);

        let path = self.db_path(model);
        if !db_exists(&path).await {
            tracing::debug!(model = %model, path = %path.display(), "No database yet");
            return ModelStats::no_data(model);
        }

        let mut conn = match db::open_read_only(&path).await {
            Ok(conn) => conn,
            Err(e) => return stats_failure(model, e.into()),
        };

        let result = read_stats(&mut conn, model, today).await;
        close(conn, model).await;

        match result {
            Ok(stats) => stats,
            Err(e) => stats_failure(model, e.into()),
        }
    }

    /// Stats for each model, read concurrently, in the given order.
    pub async fn compute_all(&self, models: &[String]) -> Vec<ModelStats> {
        join_all(models.iter().map(|m| self.compute_stats(m))).await
    }

    /// Up to `limit` most recent trades of `model`, newest first.
    ///
    /// A missing database is an empty list; read errors are returned so the
    /// caller can tell "no trades" apart from "could not read".
    pub async fn recent_trades(
        &self,
        model: &str,
        limit: i64,
    ) -> Result<Vec<TradeSummary>, ReadFailure> {
        let path = self.db_path(model);
        if !db_exists(&path).await {
            return Ok(Vec::new());
        }

        read_recent(&path, model, limit.max(0)).await.map_err(|e| {
            let failure = ReadFailure::from(e);
            counter!(
                "recent_trades_failures_total",
                "model" => model.to_string(),
                "kind" => failure.kind.as_str()
            )
            .increment(1);
            tracing::warn!(model = %model, error = %failure, "Failed to read recent trades");
            failure
        })
    }
}

async fn read_stats(
    conn: &mut SqliteConnection,
    model: &str,
    today: NaiveDate,
) -> Result<ModelStats, sqlx::Error> {
    let closed = stats_repo::closed_aggregates(conn).await?;
    let open_positions = stats_repo::count_open_positions(conn).await?;
    let today = stats_repo::today_aggregates(conn, today).await?;
    let last_trade = stats_repo::last_trade(conn).await?;

    Ok(ModelStats::from_aggregates(
        model,
        closed,
        open_positions,
        today,
        last_trade,
    ))
}

async fn read_recent(
    path: &Path,
    model: &str,
    limit: i64,
) -> Result<Vec<TradeSummary>, sqlx::Error> {
    let mut conn = db::open_read_only(path).await?;
    let trades = trade_repo::get_recent_trades(&mut conn, limit).await;
    close(conn, model).await;
    trades
}

async fn db_exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

async fn close(conn: SqliteConnection, model: &str) {
    if let Err(e) = conn.close().await {
        tracing::debug!(model = %model, error = %e, "Error closing connection");
    }
}

fn stats_failure(model: &str, failure: ReadFailure) -> ModelStats {
    counter!(
        "stats_read_failures_total",
        "model" => model.to_string(),
        "kind" => failure.kind.as_str()
    )
    .increment(1);
    tracing::warn!(model = %model, error = %failure, "Failed to compute stats");
    ModelStats::failed(model, failure)
}
