use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Date format of the `date` column: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One day of temperature observations.
///
/// `max_temperature >= min_temperature` is expected but not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub max_temperature: f64,
    pub min_temperature: f64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, max_temperature: f64, min_temperature: f64) -> Self {
        Self {
            date,
            max_temperature,
            min_temperature,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month, 1-12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn is_inverted(&self) -> bool {
        self.max_temperature < self.min_temperature
    }
}

/// Format a date as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        let formatted = format_date(&date);
        assert_eq!(formatted, "2023-06-15");
        assert_eq!(parse_date(&formatted).unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_compact_format() {
        assert!(parse_date("20230615").is_err());
        assert!(parse_date("2023-13-01").is_err());
    }

    #[test]
    fn test_year_and_month() {
        let record = DailyRecord::new(NaiveDate::from_ymd_opt(1998, 2, 28).unwrap(), 4.0, -3.5);
        assert_eq!(record.year(), 1998);
        assert_eq!(record.month(), 2);
        assert!(!record.is_inverted());
    }
}
