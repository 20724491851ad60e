use sqlx::SqliteConnection;

use crate::models::TradeSummary;

/// Get the N most recent trades of any status, newest first.
pub async fn get_recent_trades(
    conn: &mut SqliteConnection,
    limit: i64,
) -> Result<Vec<TradeSummary>, sqlx::Error> {
    sqlx::query_as::<_, TradeSummary>(
        r#"
        SELECT
            CAST(market_question AS TEXT) AS market,
            CAST(side AS TEXT) AS side,
            CAST(size AS REAL) AS size,
            CAST(price AS REAL) AS price,
            CAST(pnl AS REAL) AS pnl,
            CAST(status AS TEXT) AS status,
            CAST(created_at AS TEXT) AS created_at,
            CAST(updated_at AS TEXT) AS updated_at
        FROM trades
        ORDER BY created_at DESC
        LIMIT ?
        "#,
    )
    .bind(limit)
    .fetch_all(conn)
    .await
}
