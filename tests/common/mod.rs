use std::path::Path;

use chrono::{Local, NaiveDateTime};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

use tradeboard::config::AppConfig;
use tradeboard::db::db_path;

pub const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A temp directory laid out like a deployment: `data/` and
/// `dashboard/trading/` under one root.
#[allow(dead_code)]
pub struct Fixture {
    pub dir: TempDir,
    pub config: AppConfig,
}

#[allow(dead_code)]
pub fn setup() -> Fixture {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = AppConfig::with_base_dir(dir.path());
    std::fs::create_dir_all(&config.data_dir).expect("Failed to create data dir");
    Fixture { dir, config }
}

/// Create `trades_<model>.db` with the writer's schema and return a
/// writable connection to seed it.
#[allow(dead_code)]
pub async fn create_trades_db(data_dir: &Path, model: &str) -> SqliteConnection {
    let mut conn = open_writable(&db_path(data_dir, model)).await;

    sqlx::query(
        r#"
        CREATE TABLE trades (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            market_id TEXT,
            market_question TEXT,
            side TEXT,
            size REAL,
            price REAL,
            pnl REAL,
            status TEXT,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&mut conn)
    .await
    .expect("Failed to create trades table");

    conn
}

#[allow(dead_code)]
pub async fn open_writable(path: &Path) -> SqliteConnection {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Delete)
        .connect()
        .await
        .expect("Failed to open test database")
}

/// Seed one trade row.
#[allow(dead_code)]
pub async fn seed_trade(
    conn: &mut SqliteConnection,
    market: &str,
    pnl: Option<f64>,
    status: &str,
    created_at: NaiveDateTime,
) {
    let ts = created_at.format(TS_FORMAT).to_string();

    sqlx::query(
        r#"
        INSERT INTO trades (market_question, side, size, price, pnl, status, created_at, updated_at)
        VALUES (?, 'BUY', 10.0, 0.55, ?, ?, ?, ?)
        "#,
    )
    .bind(market)
    .bind(pnl)
    .bind(status)
    .bind(&ts)
    .bind(&ts)
    .execute(conn)
    .await
    .expect("Failed to seed trade");
}

/// Three closed trades (pnl 10, -5, 20) and one open trade, all created
/// today. Closes the writer connection before returning.
#[allow(dead_code)]
pub async fn seed_standard_model(data_dir: &Path, model: &str) {
    let mut conn = create_trades_db(data_dir, model).await;
    let now = Local::now().naive_local();

    seed_trade(&mut conn, "Will BTC close above 100k?", Some(10.0), "CLOSED", now - chrono::Duration::minutes(40)).await;
    seed_trade(&mut conn, "Will it rain in NYC?", Some(-5.0), "CLOSED", now - chrono::Duration::minutes(30)).await;
    seed_trade(&mut conn, "Fed cuts rates in March?", Some(20.0), "CLOSED", now - chrono::Duration::minutes(20)).await;
    seed_trade(&mut conn, "ETH flips BTC?", None, "OPEN", now - chrono::Duration::minutes(10)).await;

    conn.close().await.expect("Failed to close seed connection");
}
