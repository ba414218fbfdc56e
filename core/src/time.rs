//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime from now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time as unix milliseconds in decimal: "1700000000123"
pub fn format_timestamp_millis(t: DateTime) -> String {
    t.timestamp_millis().to_string()
}
