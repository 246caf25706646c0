//! Time related utils.

use chrono::Utc;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get the current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time as the decimal unix epoch milliseconds string: "1585068666450".
///
/// This is the timestamp representation carried inside signatures, so it must
/// stay a plain decimal string with no separators.
pub fn format_unix_millis(t: DateTime) -> String {
    t.timestamp_millis().to_string()
}
