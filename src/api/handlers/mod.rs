pub mod comparison;
pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod models;

/// Response timestamp, RFC 3339 in server local time.
pub(crate) fn now_timestamp() -> String {
    chrono::Local::now().to_rfc3339()
}
