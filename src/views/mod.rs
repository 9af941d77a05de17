pub mod alerts;
pub mod categories;
pub mod dashboard;
pub mod products;

use chrono::{DateTime, NaiveDateTime};

/// Timestamps arrive in whatever shape the backend serializer picked:
/// RFC 2822 for database rows, ISO 8601 without offset for health checks.
fn parse_flexible(raw: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.naive_local())
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok())
}

/// Display formatting for wire timestamps; unparseable input passes
/// through untouched rather than failing a render.
pub(crate) fn format_timestamp(raw: &str) -> String {
    parse_flexible(raw)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

pub(crate) fn format_date(raw: &str) -> String {
    parse_flexible(raw)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc2822_and_sql_datetimes() {
        assert_eq!(
            format_timestamp("Wed, 06 Aug 2025 10:30:00 GMT"),
            "06/08/2025 10:30"
        );
        assert_eq!(format_timestamp("2025-08-06 10:30:00"), "06/08/2025 10:30");
        assert_eq!(format_date("2025-08-06 10:30:00"), "06/08/2025");
    }

    #[test]
    fn unparseable_timestamp_passes_through() {
        assert_eq!(format_timestamp("hace un rato"), "hace un rato");
    }
}
