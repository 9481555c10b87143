use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Month bucketing for order timestamps.
///
/// Orders carry `created_at` as the raw string the record store returned
/// (RFC 3339 for timestamptz columns). The month key is derived in the local
/// time zone of the computing process, matching the behavior the dashboard
/// has always shown. Note this buckets UTC-stored timestamps by render-time
/// locale, so two deployments in different zones can disagree near month
/// boundaries; preserved deliberately, see DESIGN.md.

/// Derive the `YYYY-MM` month key from a raw `created_at` string.
///
/// Accepts RFC 3339 timestamps (converted to local time before keying),
/// zone-less timestamps, and bare dates. Returns `None` for anything else;
/// callers decide whether that is an error.
pub fn month_key(raw: &str) -> Option<String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Local).format("%Y-%m").to_string());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.format("%Y-%m").to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.format("%Y-%m").to_string());
    }
    None
}

/// Format a UTC timestamp the way the record store serializes it
pub fn to_store_timestamp(ts: DateTime<chrono::Utc>) -> String {
    ts.to_rfc3339()
}
