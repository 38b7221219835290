//! Access to "today" so budget questions stay deterministic in tests.

use chrono::{Local, NaiveDate};

use crate::error::{FddError, FddResult};
use crate::models::CalendarContext;

/// Environment variable that pins the calendar date (`YYYY-MM-DD`)
pub const TODAY_ENV: &str = "FDD_TODAY";

/// Clock abstracts access to the current calendar date.
pub trait Clock {
    /// Returns the current local date.
    fn today(&self) -> NaiveDate;

    /// Calendar context for the current date.
    fn calendar(&self) -> CalendarContext {
        CalendarContext::new(self.today())
    }
}

/// Real clock backed by the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Pick the clock for this run: a pinned date if `FDD_TODAY` is set, else the system clock.
pub fn from_env() -> FddResult<Box<dyn Clock>> {
    match std::env::var(TODAY_ENV) {
        Ok(raw) => Ok(Box::new(parse_fixed(&raw)?)),
        Err(_) => Ok(Box::new(SystemClock)),
    }
}

fn parse_fixed(raw: &str) -> FddResult<FixedClock> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map(FixedClock)
        .map_err(|e| FddError::Config(format!("{} must be YYYY-MM-DD, got '{}': {}", TODAY_ENV, raw, e)))
}
