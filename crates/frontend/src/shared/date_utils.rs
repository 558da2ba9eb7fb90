//! Date and time display formatting
//!
//! All backend dates arrive as ISO strings; these helpers render them
//! in the DD.MM.YYYY form used across the UI.

use chrono::{DateTime, NaiveDate};

/// Format an ISO date ("2024-03-15", with or without a time part)
/// as "15.03.2024". Unparseable input is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format an RFC 3339 timestamp ("2024-03-15T14:02:26.123Z")
/// as "15.03.2024 14:02:26". Falls back to [`format_date`].
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datetime_renders_date_and_clock() {
        assert_eq!(
            format_datetime("2024-07-09T08:15:03.042Z"),
            "09.07.2024 08:15:03"
        );
        assert_eq!(format_datetime("2025-01-01T00:00:00Z"), "01.01.2025 00:00:00");
    }

    #[test]
    fn date_drops_the_time_part() {
        assert_eq!(format_date("2024-07-09"), "09.07.2024");
        assert_eq!(format_date("2024-07-09T08:15:03.042Z"), "09.07.2024");
    }

    #[test]
    fn datetime_without_offset_falls_back_to_date() {
        assert_eq!(format_datetime("2024-07-09"), "09.07.2024");
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_datetime("soon"), "soon");
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date("2024-13-90"), "2024-13-90");
    }
}
