//! Display formatting for terminal output

pub mod report;

pub use report::{format_date, format_spend, format_status, OutputOptions};
