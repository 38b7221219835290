//! Calendar context for budget calculations
//!
//! Derived from the current date on every run and never persisted.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::error::{FddError, FddResult};

/// Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        return true;
    }
    if year % 100 == 0 {
        return false;
    }
    year % 4 == 0
}

/// Number of days in a month (1-12) of the given year
///
/// Returns 0 for a month outside 1-12.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// The date a budget question is asked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarContext {
    date: NaiveDate,
}

impl CalendarContext {
    /// Create a context for the given date
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Create a context from year, month and day, validating the date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> FddResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::new)
            .ok_or_else(|| {
                FddError::Validation(format!("{:04}-{:02}-{:02} is not a valid date", year, month, day))
            })
    }

    /// Today's date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month, 1-12
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month, 1-31
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Number of days in the current month
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// A day within the current month, if it exists
    pub fn day_in_month(&self, day: u32) -> Option<NaiveDate> {
        self.date.with_day(day)
    }

    /// The first day of the following month, wrapping into the next year
    pub fn first_of_next_month(&self) -> NaiveDate {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        // The first of any month always exists within chrono's range
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(self.date)
    }
}

impl fmt::Display for CalendarContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%d.%m.%Y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_february_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2100, 2), 28);
    }

    #[test]
    fn test_month_lengths_match_chrono() {
        for year in [1900, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let next = CalendarContext::new(first).first_of_next_month();
                assert_eq!(
                    (next - first).num_days(),
                    days_in_month(year, month) as i64,
                    "{}-{}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(days_in_month(2024, 13), 0);
    }

    #[test]
    fn test_first_of_next_month_wraps_year() {
        let ctx = CalendarContext::from_ymd(2026, 12, 18).unwrap();
        assert_eq!(ctx.first_of_next_month(), NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());

        let ctx = CalendarContext::from_ymd(2026, 10, 31).unwrap();
        assert_eq!(ctx.first_of_next_month(), NaiveDate::from_ymd_opt(2026, 11, 1).unwrap());
    }

    #[test]
    fn test_from_ymd_rejects_bad_dates() {
        assert!(CalendarContext::from_ymd(2023, 2, 29).is_err());
        assert!(CalendarContext::from_ymd(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_day_in_month() {
        let ctx = CalendarContext::from_ymd(2026, 4, 10).unwrap();
        assert_eq!(ctx.day_in_month(30), NaiveDate::from_ymd_opt(2026, 4, 30));
        assert_eq!(ctx.day_in_month(31), None);
    }

    #[test]
    fn test_display() {
        let ctx = CalendarContext::from_ymd(2026, 3, 7).unwrap();
        assert_eq!(ctx.to_string(), "07.03.2026");
    }
}
