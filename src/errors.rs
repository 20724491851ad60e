use std::fmt;

use serde::Serialize;

/// Coarse classification of a failed read, so callers can branch on the
/// kind instead of parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The file could not be opened or read at the OS level.
    Unavailable,
    /// Another connection holds a lock the read needs.
    Locked,
    /// The file is not a database or is malformed.
    Corrupt,
    /// Missing table/column or a column holding an unexpected type.
    Schema,
    Query,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Unavailable => "unavailable",
            FailureKind::Locked => "locked",
            FailureKind::Corrupt => "corrupt",
            FailureKind::Schema => "schema",
            FailureKind::Query => "query",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why reading a model's database failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct ReadFailure {
    pub kind: FailureKind,
    pub detail: String,
}

impl ReadFailure {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }
}

// SQLite primary result codes (the low byte of an extended code).
const SQLITE_ERROR: i64 = 1;
const SQLITE_BUSY: i64 = 5;
const SQLITE_LOCKED: i64 = 6;
const SQLITE_IOERR: i64 = 10;
const SQLITE_CORRUPT: i64 = 11;
const SQLITE_CANTOPEN: i64 = 14;
const SQLITE_NOTADB: i64 = 26;

impl From<sqlx::Error> for ReadFailure {
    fn from(e: sqlx::Error) -> Self {
        let kind = match &e {
            sqlx::Error::Database(db) => db
                .code()
                .and_then(|code| code.parse::<i64>().ok())
                .map(|code| kind_for_code(code & 0xff))
                .unwrap_or(FailureKind::Query),
            sqlx::Error::Io(_) => FailureKind::Unavailable,
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::TypeNotFound { .. } => FailureKind::Schema,
            _ => FailureKind::Query,
        };

        let detail = match &e {
            sqlx::Error::Database(db) => db.message().to_string(),
            other => other.to_string(),
        };

        ReadFailure { kind, detail }
    }
}

fn kind_for_code(primary: i64) -> FailureKind {
    match primary {
        // "no such table" / "no such column" surface as the generic error code
        SQLITE_ERROR => FailureKind::Schema,
        SQLITE_BUSY | SQLITE_LOCKED => FailureKind::Locked,
        SQLITE_CORRUPT | SQLITE_NOTADB => FailureKind::Corrupt,
        SQLITE_IOERR | SQLITE_CANTOPEN => FailureKind::Unavailable,
        _ => FailureKind::Query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_codes_map_to_kinds() {
        assert_eq!(kind_for_code(SQLITE_ERROR), FailureKind::Schema);
        assert_eq!(kind_for_code(SQLITE_BUSY), FailureKind::Locked);
        assert_eq!(kind_for_code(SQLITE_NOTADB), FailureKind::Corrupt);
        assert_eq!(kind_for_code(SQLITE_CANTOPEN), FailureKind::Unavailable);
        assert_eq!(kind_for_code(19), FailureKind::Query);
    }

    #[test]
    fn extended_codes_use_primary_byte() {
        // SQLITE_BUSY_SNAPSHOT = 517
        assert_eq!(kind_for_code(517 & 0xff), FailureKind::Locked);
    }

    #[test]
    fn column_errors_are_schema_failures() {
        let failure = ReadFailure::from(sqlx::Error::ColumnNotFound("pnl".into()));
        assert_eq!(failure.kind, FailureKind::Schema);
        assert!(failure.detail.contains("pnl"));
    }

    #[test]
    fn display_includes_kind_and_detail() {
        let failure = ReadFailure::new(FailureKind::Locked, "database is locked");
        assert_eq!(failure.to_string(), "locked: database is locked");
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let failure = ReadFailure::new(FailureKind::Corrupt, "file is not a database");
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["kind"], "corrupt");
        assert_eq!(json["detail"], "file is not a database");
    }
}
