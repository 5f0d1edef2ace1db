//! Shared helpers for rendering entry fields

use chrono::DateTime;

use crate::error::{ListingError, Result};

/// Pattern for modification times in long format, e.g. `Nov 14 09:31`.
pub const TIME_FORMAT: &str = "%b %d %H:%M";

/// Render a Unix timestamp as UTC.
pub fn format_time(timestamp: i64) -> Result<String> {
    DateTime::from_timestamp(timestamp, 0)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .ok_or(ListingError::InvalidTimestamp(timestamp))
}

/// Strip the extension from a name for long format.
///
/// Splits at the last `.` after the last `/`, but only when something other
/// than dots comes before it in that component, so `.bashrc`, `..` and
/// `a.b/c` are left alone.
pub fn display_name(name: &str) -> &str {
    let start = name.rfind('/').map_or(0, |i| i + 1);
    let base = &name[start..];
    match base.rfind('.') {
        Some(idx) if base[..idx].chars().any(|c| c != '.') => &name[..start + idx],
        _ => name,
    }
}
