//! Display and parsing helpers
//!
//! Dates travel through forms as `YYYY-MM-DD` strings and times as `HH:MM`;
//! everything shown to the user goes through the formatters here so every
//! page renders the same way.

use crate::error::{TmsError, TmsResult};
use chrono::{NaiveDate, NaiveTime};

/// Form/storage date format
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Form/storage time format
pub const TIME_INPUT_FORMAT: &str = "%H:%M";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> TmsResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).map_err(|_| {
        TmsError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Parse an `HH:MM` time of day
pub fn parse_time(value: &str) -> TmsResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_INPUT_FORMAT).map_err(|_| TmsError::InvalidTime {
        value: value.to_string(),
    })
}

/// Date as used by form inputs (`2024-03-05`)
pub fn date_input_value(date: NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

/// Time as used by form inputs (`08:30`)
pub fn time_input_value(time: NaiveTime) -> String {
    time.format(TIME_INPUT_FORMAT).to_string()
}

/// `Mar 5, 2024`
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `March 5, 2024`
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `Tuesday, Mar 5`
pub fn format_weekday_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

/// `9:05 AM`, or `N/A` when the time is missing
pub fn format_time_12h(time: Option<NaiveTime>) -> String {
    match time {
        Some(t) => t.format("%-I:%M %p").to_string(),
        None => "N/A".to_string(),
    }
}

/// Whole-dollar currency with thousands separators (`$65,000`)
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// One decimal place (`94.2`)
pub fn format_one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

/// Uppercase first letter of each word, as used by avatar fallbacks
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-03-05").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(parse_date("05/03/2024").unwrap_err().is_validation());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_time() {
        let time = parse_time("08:30").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert!(parse_time("8.30").is_err());
    }

    #[test]
    fn test_date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date_short(date), "Mar 5, 2024");
        assert_eq!(format_date_long(date), "March 5, 2024");
        assert_eq!(format_weekday_date(date), "Tuesday, Mar 5");
        assert_eq!(date_input_value(date), "2024-03-05");
    }

    #[test]
    fn test_format_time_12h() {
        let morning = NaiveTime::from_hms_opt(9, 5, 0);
        let afternoon = NaiveTime::from_hms_opt(16, 30, 0);
        assert_eq!(format_time_12h(morning), "9:05 AM");
        assert_eq!(format_time_12h(afternoon), "4:30 PM");
        assert_eq!(format_time_12h(None), "N/A");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(950), "$950");
        assert_eq!(format_currency(65000), "$65,000");
        assert_eq!(format_currency(1234567), "$1,234,567");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("  admin   user "), "AU");
        assert_eq!(initials(""), "");
    }
}
