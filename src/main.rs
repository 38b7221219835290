use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use fdd::cli::{run, usage, Cli};
use fdd::config::{paths::FddPaths, settings::Settings};
use fdd::display::OutputOptions;
use fdd::storage::StateStore;
use fdd::FddError;

const PROGRAM: &str = "fdd";

fn main() -> ExitCode {
    fdd::init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            print!("{}", usage(PROGRAM));
            return ExitCode::FAILURE;
        }
    };

    if cli.help {
        print!("{}", usage(PROGRAM));
        return ExitCode::FAILURE;
    }

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            if err.downcast_ref::<FddError>().is_some_and(FddError::is_usage) {
                print!("{}", usage(PROGRAM));
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<()> {
    // Initialize paths and settings
    let paths = FddPaths::new()?;
    let settings = Settings::load_or_create(&paths)
        .with_context(|| format!("reading {}", paths.settings_file().display()))?;
    let today = fdd::clock::from_env()?.calendar();

    let store = StateStore::new(paths.state_file());
    let options = OutputOptions::new(&settings, cli.verbose, cli.summary);

    let stdout = io::stdout();
    run(cli, &store, &options, &today, &mut stdout.lock())?;

    Ok(())
}
