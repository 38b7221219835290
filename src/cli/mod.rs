//! CLI command handling
//!
//! Bridges clap argument parsing with the budget service. Flags compose: a
//! month is initialized first, then each spend is recorded in order, and the
//! report is always printed last.

use std::io::Write;

use clap::{ArgAction, Parser};

use crate::display::{format_spend, format_status, OutputOptions};
use crate::error::FddResult;
use crate::models::{CalendarContext, Money};
use crate::services::BudgetService;
use crate::storage::StateStore;

/// Command line of the `fdd` binary
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "fdd",
    version,
    about = "Your personal fast food budget",
    disable_help_flag = true
)]
pub struct Cli {
    /// Start a new month with this allowance per day (in cents)
    #[arg(short = 'i', value_name = "CENTS", allow_negative_numbers = true)]
    pub init: Option<i64>,

    /// Record a spend (in cents); may be given more than once
    #[arg(short = 's', value_name = "CENTS", action = ArgAction::Append, allow_negative_numbers = true)]
    pub spend: Vec<i64>,

    /// Include the summary block in the verbose report
    #[arg(short = 't')]
    pub summary: bool,

    /// Print full sentences instead of the compact format
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Print usage
    #[arg(short = 'h')]
    pub help: bool,
}

/// Usage text printed for `-h` and invalid invocations
pub fn usage(program: &str) -> String {
    format!(
        "fdd -- Your personal fast food budget\n\
         USAGE: {p} [-i N] [-s N] [-t] [-v]\n\
         \tOn a new month:\n\
         \t\t{p} -i <money available per day (in cents)>\n\
         \tOtherwise:\n\
         \t\t{p} -s <spent amount (in cents)>\n\
         \t\t{p} -t\tDisplays a summary\n",
        p = program
    )
}

/// Run the parsed command line, writing results to `out`
pub fn run<W: Write>(
    cli: &Cli,
    store: &StateStore,
    options: &OutputOptions,
    today: &CalendarContext,
    out: &mut W,
) -> FddResult<()> {
    let service = BudgetService::new(store);

    if let Some(allowance) = cli.init {
        service.init_month(Money::from_cents(allowance), today)?;
    }

    for &amount in &cli.spend {
        let outcome = service.spend(Money::from_cents(amount))?;
        out.write_all(format_spend(&outcome, options).as_bytes())?;
    }

    let report = service.status(today)?;
    out.write_all(format_status(&report, options).as_bytes())?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::FddError;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fdd").chain(args.iter().copied())).unwrap()
    }

    fn run_to_string(cli: &Cli, store: &StateStore, day: u32) -> FddResult<String> {
        let options = OutputOptions::new(&Settings::default(), cli.verbose, cli.summary);
        let today = CalendarContext::from_ymd(2026, 10, day).unwrap();
        let mut out = Vec::new();
        run(cli, store, &options, &today, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_flags() {
        let cli = parse(&["-i", "100", "-s", "250", "-s", "50", "-t", "-v"]);
        assert_eq!(cli.init, Some(100));
        assert_eq!(cli.spend, vec![250, 50]);
        assert!(cli.summary);
        assert!(cli.verbose);
        assert!(!cli.help);
    }

    #[test]
    fn test_parse_combined_short_flags() {
        let cli = parse(&["-vt"]);
        assert!(cli.verbose && cli.summary);
    }

    #[test]
    fn test_parse_negative_amount_reaches_validation() {
        let cli = parse(&["-i", "-5"]);
        assert_eq!(cli.init, Some(-5));
    }

    #[test]
    fn test_parse_rejects_unknown_flag_and_bad_number() {
        assert!(Cli::try_parse_from(["fdd", "-x"]).is_err());
        assert!(Cli::try_parse_from(["fdd", "-s", "ten"]).is_err());
    }

    #[test]
    fn test_help_flag_is_plain_bool() {
        assert!(parse(&["-h"]).help);
    }

    #[test]
    fn test_usage_names_program() {
        let text = usage("fdd");
        assert!(text.starts_with("fdd -- Your personal fast food budget\n"));
        assert!(text.contains("\t\tfdd -s <spent amount (in cents)>\n"));
    }

    #[test]
    fn test_init_spend_and_report_in_one_run() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("budget.dat"));

        let out = run_to_string(&parse(&["-i", "100", "-s", "400", "-s", "2800"]), &store, 10).unwrap();
        assert_eq!(out, "OK;\nOK; OVER;\n01.11.2026;\n");
    }

    #[test]
    fn test_report_only() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("budget.dat"));
        run_to_string(&parse(&["-i", "100"]), &store, 1).unwrap();

        let out = run_to_string(&parse(&["-t"]), &store, 10).unwrap();
        assert_eq!(out, "10.10.2026; 1000;\n");
    }

    #[test]
    fn test_missing_state_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("budget.dat"));

        let err = run_to_string(&parse(&["-t"]), &store, 10).unwrap_err();
        assert!(matches!(err, FddError::PersistenceUnavailable { .. }));
    }

    #[test]
    fn test_invalid_spend_stops_before_report() {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::new(temp_dir.path().join("budget.dat"));
        run_to_string(&parse(&["-i", "100"]), &store, 1).unwrap();

        let err = run_to_string(&parse(&["-s", "-20"]), &store, 10).unwrap_err();
        assert!(matches!(err, FddError::InvalidAmount(-20)));
        assert!(store.load().unwrap().spent.is_zero());
    }
}
