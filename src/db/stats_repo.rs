use chrono::NaiveDate;
use sqlx::SqliteConnection;

use crate::models::{ClosedAggregates, LastTrade, TodayAggregates};

/// Outcome counts and pnl aggregates over all closed trades, in one pass.
pub async fn closed_aggregates(conn: &mut SqliteConnection) -> Result<ClosedAggregates, sqlx::Error> {
    // CASTs pin the decoded type: SQLite returns INTEGER for sums/extremes
    // of integral pnl values.
    sqlx::query_as::<_, ClosedAggregates>(
        r#"
        SELECT
            COUNT(*) AS total,
            SUM(CASE WHEN pnl > 0 THEN 1 ELSE 0 END) AS winners,
            SUM(CASE WHEN pnl <= 0 THEN 1 ELSE 0 END) AS losers,
            CAST(SUM(pnl) AS REAL) AS total_pnl,
            CAST(AVG(pnl) AS REAL) AS avg_pnl,
            CAST(MAX(pnl) AS REAL) AS best,
            CAST(MIN(pnl) AS REAL) AS worst
        FROM trades
        WHERE status = 'CLOSED'
        "#,
    )
    .fetch_one(conn)
    .await
}

/// Count open positions.
pub async fn count_open_positions(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM trades WHERE status = 'OPEN'")
        .fetch_one(conn)
        .await?;

    Ok(row.0)
}

/// Closed trades created on `day`, with their summed pnl.
pub async fn today_aggregates(
    conn: &mut SqliteConnection,
    day: NaiveDate,
) -> Result<TodayAggregates, sqlx::Error> {
    sqlx::query_as::<_, TodayAggregates>(
        r#"
        SELECT COUNT(*) AS trades, CAST(SUM(pnl) AS REAL) AS pnl
        FROM trades
        WHERE DATE(created_at) = ? AND status = 'CLOSED'
        "#,
    )
    .bind(day.format("%Y-%m-%d").to_string())
    .fetch_one(conn)
    .await
}

/// Most recently created trade of any status.
pub async fn last_trade(conn: &mut SqliteConnection) -> Result<Option<LastTrade>, sqlx::Error> {
    sqlx::query_as::<_, LastTrade>(
        r#"
        SELECT
            CAST(market_question AS TEXT) AS market,
            CAST(pnl AS REAL) AS pnl,
            CAST(created_at AS TEXT) AS time,
            CAST(status AS TEXT) AS status
        FROM trades
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .fetch_optional(conn)
    .await
}
