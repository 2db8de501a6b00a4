//! Display formatting for the backend's `createdAt` timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Formats an ISO-8601 timestamp as `"March 5, 2025"`.
///
/// Accepts RFC 3339, naive date-times and bare dates. Anything else is shown
/// as received.
pub fn display_date(raw: &str) -> String {
    const FORMAT: &str = "%B %-d, %Y";
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(FORMAT).to_string();
    }
    raw.to_string()
}

/// Same as [`display_date`] for an optional field; missing dates render empty.
pub fn display_optional_date(raw: Option<&str>) -> String {
    raw.map(display_date).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_shapes() {
        assert_eq!(display_date("2025-03-05T10:20:30.000Z"), "March 5, 2025");
        assert_eq!(display_date("2025-03-05T10:20:30"), "March 5, 2025");
        assert_eq!(display_date("2025-12-24"), "December 24, 2025");
    }

    #[test]
    fn passes_unknown_shapes_through() {
        assert_eq!(display_date("ayer"), "ayer");
        assert_eq!(display_optional_date(None), "");
    }
}
