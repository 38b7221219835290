//! Service layer for fdd
//!
//! The engine holds the pure budget arithmetic; the budget service runs it
//! against the stored record.

pub mod budget;
pub mod engine;

pub use budget::BudgetService;
pub use engine::{compute_status, init_period, record_spend, Availability, SpendOutcome, StatusReport};
