//! Small shared helpers: permissive timestamp parsing and atomic file
//! writes.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};

/// Parse a stored timestamp permissively.
///
/// Accepts RFC 3339 (what the app writes) and bare `YYYY-MM-DD` dates from
/// hand-edited imports, taken as midnight UTC. Anything else is `None`:
/// a malformed `lastContact` behaves as "never contacted" rather than
/// poisoning the day arithmetic downstream.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Fractional days elapsed between a stored timestamp and `now`.
///
/// `None` when the timestamp is absent or unparseable.
pub fn days_since(now: DateTime<Utc>, timestamp: Option<&str>) -> Option<f64> {
    let ts = timestamp.and_then(parse_timestamp)?;
    Some((now - ts).num_seconds() as f64 / 86_400.0)
}

/// Write a string to `path` atomically: temp file in the same directory,
/// then rename over the target. Readers never observe a half-written file.
pub fn atomic_write_str(path: &Path, content: &str) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
