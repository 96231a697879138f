//! Date parsing and formatting helpers.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime};

/// Formats tried, in order, for text cells carrying a date and a time.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Formats tried, in order, for date-only text cells. Ambiguous numeric
/// forms resolve month-first, matching how the sheets are produced; a
/// date like `15/01/2024` falls through to the day-first entries.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

/// Parses a date from free text, trying RFC 3339 first and then the
/// accepted datetime and date formats in order. Returns `None` when no
/// format matches.
pub fn parse_date_string(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_local());
    }

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, format) {
            return parsed.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Converts an Excel serial date to a chrono datetime.
///
/// Excel's 1900 date system counts days from 1899-12-30 (the base absorbs
/// the Lotus leap-year bug), with the fraction carrying the time of day.
/// Returns `None` for values too large to represent.
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }

    let base = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;
    let days = Duration::try_days(serial.trunc() as i64)?;
    let seconds = Duration::seconds((serial.fract() * 86_400.0).round() as i64);

    base.checked_add_signed(days)?.checked_add_signed(seconds)
}

/// Date part only, as `YYYY-MM-DD`.
pub fn format_ymd(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Current wall-clock time without a timezone, for date comparisons.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn midnight(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date_string("2024-01-15"), Some(midnight(2024, 1, 15)));
        assert_eq!(parse_date_string(" 2024-01-15 "), Some(midnight(2024, 1, 15)));
    }

    #[test]
    fn parses_slash_and_us_forms() {
        assert_eq!(parse_date_string("2024/01/15"), Some(midnight(2024, 1, 15)));
        assert_eq!(parse_date_string("01/15/2024"), Some(midnight(2024, 1, 15)));
        assert_eq!(parse_date_string("01-15-2024"), Some(midnight(2024, 1, 15)));
    }

    #[test]
    fn parses_day_first_forms_when_month_first_cannot_apply() {
        assert_eq!(parse_date_string("15/01/2024"), Some(midnight(2024, 1, 15)));
        assert_eq!(parse_date_string("15-01-2024"), Some(midnight(2024, 1, 15)));
        assert_eq!(parse_date_string("31/12/2024"), Some(midnight(2024, 12, 31)));
        // Ambiguous dates stay month-first
        assert_eq!(parse_date_string("01/02/2024"), Some(midnight(2024, 1, 2)));
    }

    #[test]
    fn parses_month_name_forms() {
        assert_eq!(parse_date_string("15 Jan 2024"), Some(midnight(2024, 1, 15)));
        assert_eq!(
            parse_date_string("January 15, 2024"),
            Some(midnight(2024, 1, 15))
        );
    }

    #[test]
    fn parses_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(parse_date_string("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_date_string("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_date_string("2024-01-15T10:30:00Z"), Some(expected));
    }

    #[test]
    fn rejects_non_dates() {
        assert_eq!(parse_date_string("not a date"), None);
        assert_eq!(parse_date_string(""), None);
        assert_eq!(parse_date_string("2024-13-45"), None);
        assert_eq!(parse_date_string("15/32/2024"), None);
    }

    #[test]
    fn converts_excel_serials() {
        // 25569 is the Unix epoch, 45292 is 2024-01-01
        assert_eq!(excel_serial_to_datetime(25569.0), Some(midnight(1970, 1, 1)));
        assert_eq!(
            excel_serial_to_datetime(45292.0),
            Some(midnight(2024, 1, 1))
        );
    }

    #[test]
    fn serial_fraction_carries_time_of_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(excel_serial_to_datetime(45292.5), Some(expected));
    }

    #[test]
    fn absurd_serials_do_not_convert() {
        assert_eq!(excel_serial_to_datetime(f64::NAN), None);
        assert_eq!(excel_serial_to_datetime(f64::INFINITY), None);
        assert_eq!(excel_serial_to_datetime(1.0e18), None);
    }
}
