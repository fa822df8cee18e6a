//! Calendar-day helpers.
//!
//! The resolver keys everything off the month and day of the requested date;
//! the year only participates in tolerance checks and display formatting.

use chrono::{Datelike, NaiveDate};

/// Zero-padded `"MM-DD"` key used by the static tables.
pub fn month_day_key(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

/// Long display form, e.g. `"August 15, 1947"`.
pub fn format_long(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// Label for the historical period a year falls into.
///
/// Buckets are checked in order, so a boundary year belongs to the earlier
/// period (1500 is Medieval, 1700 is Mughal). Years before 1000 fall through
/// to the contemporary label.
pub fn historical_period(year: i32) -> &'static str {
    if (1000..=1500).contains(&year) {
        "Medieval India"
    } else if (1500..=1700).contains(&year) {
        "Mughal Era"
    } else if (1700..=1800).contains(&year) {
        "Colonial Expansion"
    } else if (1800..=1900).contains(&year) {
        "British Raj"
    } else if (1900..=1950).contains(&year) {
        "Independence Movement"
    } else if (1950..=2000).contains(&year) {
        "Modern India"
    } else {
        "Contemporary India"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_day_key_zero_pads() {
        let date = NaiveDate::from_ymd_opt(1947, 8, 5).unwrap();
        assert_eq!(month_day_key(date), "08-05");

        let date = NaiveDate::from_ymd_opt(2000, 12, 25).unwrap();
        assert_eq!(month_day_key(date), "12-25");
    }

    #[test]
    fn test_format_long() {
        let date = NaiveDate::from_ymd_opt(1947, 8, 15).unwrap();
        assert_eq!(format_long(date), "August 15, 1947");
    }

    #[test]
    fn test_period_boundaries_belong_to_earlier_bucket() {
        assert_eq!(historical_period(1500), "Medieval India");
        assert_eq!(historical_period(1501), "Mughal Era");
        assert_eq!(historical_period(1700), "Mughal Era");
        assert_eq!(historical_period(1800), "Colonial Expansion");
        assert_eq!(historical_period(1900), "British Raj");
        assert_eq!(historical_period(1950), "Independence Movement");
        assert_eq!(historical_period(2000), "Modern India");
    }

    #[test]
    fn test_period_outliers_are_contemporary() {
        assert_eq!(historical_period(999), "Contemporary India");
        assert_eq!(historical_period(2024), "Contemporary India");
    }
}
