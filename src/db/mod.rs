pub mod stats_repo;
pub mod trade_repo;

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;

/// Location of a model's trade database inside `data_dir`.
pub fn db_path(data_dir: &Path, model: &str) -> PathBuf {
    data_dir.join(format!("trades_{model}.db"))
}

/// Open a read-only connection to an existing database file.
///
/// The file is never created; callers check for existence first so a
/// missing database can be reported as "no data" instead of an error.
pub async fn open_read_only(path: &Path) -> Result<SqliteConnection, sqlx::Error> {
    SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false)
        .connect()
        .await
}
