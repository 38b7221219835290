//! Core data models for fdd
//!
//! The budget domain is small: an amount type, the month's allocation and
//! the calendar date a question is asked on.

pub mod calendar;
pub mod money;
pub mod period;

pub use calendar::{days_in_month, is_leap_year, CalendarContext};
pub use money::Money;
pub use period::BudgetPeriod;
