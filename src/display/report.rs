//! Report formatting for terminal output
//!
//! Compact output is one `;`-terminated line meant for scripts. Verbose output
//! uses full sentences and `<units>.<cents> <CURRENCY>` amounts.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;
use crate::services::{Availability, SpendOutcome, StatusReport};

const SUMMARY_WIDTH: usize = 38;

/// How results are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Full sentences instead of the compact line format
    pub verbose: bool,
    /// Prefix the verbose report with the summary block
    pub summary: bool,
    pub currency: String,
    pub summary_title: String,
}

impl OutputOptions {
    /// Build options from settings and command line flags
    pub fn new(settings: &Settings, verbose: bool, summary: bool) -> Self {
        Self {
            verbose,
            summary,
            currency: settings.currency.clone(),
            summary_title: settings.summary_title.clone(),
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_currency(&self.currency)
    }
}

/// Format a date as `DD.MM.YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

/// Confirmation printed after a spend
pub fn format_spend(outcome: &SpendOutcome, options: &OutputOptions) -> String {
    let mut out = if options.verbose {
        format!("Spending of {} checked in.", options.money(outcome.amount))
    } else {
        "OK;".to_string()
    };

    if outcome.over_budget {
        out.push_str(if options.verbose {
            " You overspent your monthly budget!"
        } else {
            " OVER;"
        });
    }

    out.push('\n');
    out
}

/// Status report, compact or verbose depending on the options
pub fn format_status(report: &StatusReport, options: &OutputOptions) -> String {
    if options.verbose {
        format_status_verbose(report, options)
    } else {
        format_status_compact(report)
    }
}

fn format_status_compact(report: &StatusReport) -> String {
    match report.availability {
        Availability::Available { remaining } => {
            format!("{}; {};\n", format_date(report.date()), remaining.cents())
        }
        Availability::AvailableLater { on } | Availability::AvailableNextMonth { on } => {
            format!("{};\n", format_date(on))
        }
        Availability::NoBudget => "NOBUDGET;\n".to_string(),
    }
}

fn format_status_verbose(report: &StatusReport, options: &OutputOptions) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    if options.summary {
        let _ = writeln!(out, "{}", separator(SUMMARY_WIDTH));
        let _ = writeln!(out, " {}:", options.summary_title);
        let _ = writeln!(out, "{}", separator(SUMMARY_WIDTH));
        let _ = writeln!(out, " Today is {}.", report.today);
        let _ = writeln!(
            out,
            " Your monthly budget is: {}",
            options.money(report.period.monthly_budget)
        );
        let _ = writeln!(out, " You spent:              {}", options.money(report.period.spent));
        let _ = writeln!(out, " Budget until today:     {}", options.money(report.budget_today));
        let _ = writeln!(out, "{}", separator(SUMMARY_WIDTH));
        out.push('\n');
    }

    let _ = match report.availability {
        Availability::Available { remaining } => {
            writeln!(out, "You can spend {}", options.money(remaining))
        }
        Availability::AvailableLater { on } => {
            writeln!(out, "You can spend again on {}", format_date(on))
        }
        Availability::AvailableNextMonth { .. } => writeln!(out, "You can spend again next month."),
        Availability::NoBudget => writeln!(out, "No budget configured. Start a month with -i."),
    };
    out.push('\n');

    out
}
