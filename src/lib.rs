//! fdd - personal daily-spending budget
//!
//! Allocates a monthly budget from a per-day allowance, records spending and
//! reports how much is left to spend today, or when spending is allowed again.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: State file path resolution and settings
//! - `error`: Custom error types
//! - `models`: Money, the month's budget period and the calendar context
//! - `storage`: Atomic file I/O and the binary budget record
//! - `services`: The budget engine and the service running it against storage
//! - `display`: Compact and verbose output formatting
//! - `cli`: Command line parsing and dispatch
//! - `clock`: Source of "today"
//!
//! # Example
//!
//! ```
//! use fdd::models::{BudgetPeriod, CalendarContext, Money};
//! use fdd::services::{compute_status, Availability};
//!
//! let period = BudgetPeriod::new(Money::from_cents(3100), Money::from_cents(1550)).unwrap();
//! let today = CalendarContext::from_ymd(2026, 10, 10).unwrap();
//!
//! let report = compute_status(&period, &today);
//! assert!(matches!(report.availability, Availability::AvailableLater { .. }));
//! ```

pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FddError, FddResult};

use std::sync::Once;

/// Environment variable holding the log filter (e.g. `fdd=debug`)
pub const LOG_ENV: &str = "FDD_LOG";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, logging to stderr.
///
/// Stdout is reserved for the report so the compact format stays parsable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("fdd=warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_tracing_is_idempotent() {
        super::init_tracing();
        super::init_tracing();
    }
}
