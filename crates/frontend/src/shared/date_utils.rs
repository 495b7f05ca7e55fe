/// Utilities for date and time formatting
///
/// Backend timestamps are ISO strings (`2024-03-15T14:02:26.123`) with or
/// without offset; they are displayed as `YYYY-MM-DD HH:mm`.
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Shown for a missing timestamp
pub const UNDEFINED_DATE: &str = "Non défini";

/// Format ISO datetime string to `YYYY-MM-DD HH:mm`
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    let s = datetime_str.trim();
    if s.is_empty() {
        return UNDEFINED_DATE.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.naive_local().format("%Y-%m-%d %H:%M").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return format!("{} 00:00", d.format("%Y-%m-%d"));
    }
    s.to_string()
}

/// Date part of an ISO timestamp or `datetime-local` value
/// Example: "2024-03-15T14:02" -> "2024-03-15"
pub fn date_part(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-03-15T14:02:26Z"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-03-15T14:02"), "2024-03-15 14:02");
        assert_eq!(format_datetime("2024-03-15"), "2024-03-15 00:00");
    }

    #[test]
    fn test_missing_and_invalid() {
        assert_eq!(format_datetime(""), UNDEFINED_DATE);
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-03-15T14:02:26"), "2024-03-15");
        assert_eq!(date_part("2024-03-15"), "2024-03-15");
        assert_eq!(date_part(""), "");
    }
}
