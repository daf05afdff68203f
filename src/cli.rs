//! CLI module containing the main entry point logic.
//!
//! Kept out of main.rs so the whole front end can be driven from the library.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use crate::config::{self, Settings};
use crate::output::{self, OutputFormat};
use crate::{reducer, repl};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "NOOP_LOG";

const LONG_ABOUT: &str = "A calculator with no operators

All digits are added together. Only single-character numbers can be
used, including Roman numeral characters. If the input has a period,
the digits to its left are negative.

Without NUMBER an interactive prompt reads one input per line.";

/// CLI arguments for noop.
#[derive(ClapParser, Debug)]
#[command(name = "noop")]
#[command(version = PKG_VERSION)]
#[command(about = "A calculator with no operators", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Digits and Roman numerals to add, e.g. `29L8.1c829`
    #[arg(value_name = "NUMBER")]
    pub number: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,

    /// Settings file (defaults to ~/.noop.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not print the banner when starting the interactive prompt
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Fold command-line flags over loaded settings.
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(format) = self.output_format {
            settings.output_format = format;
        }
        if self.quiet {
            settings.banner = false;
        }
    }
}

/// Install the stderr log subscriber. Filter comes from `NOOP_LOG`,
/// defaulting to warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Ignore the error: a subscriber may already be installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

/// Reduce one argument, print the outcome, and report success.
fn run_once(number: &str, format: OutputFormat) -> ExitCode {
    let outcome = reducer::add(number);
    match output::render(format, number, outcome) {
        Ok(rendered) => {
            match (format, outcome) {
                (OutputFormat::Text, Err(_)) => eprintln!("{rendered}"),
                _ => println!("{rendered}"),
            }
            if outcome.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {}", crate::error::Error::from(e));
            ExitCode::FAILURE
        }
    }
}

/// Main CLI logic.
#[must_use]
pub fn run_cli() -> ExitCode {
    run_with(&Cli::parse())
}

/// Run with already-parsed arguments.
#[must_use]
pub fn run_with(cli: &Cli) -> ExitCode {
    init_logging();

    let mut settings = match config::load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    cli.apply_to(&mut settings);

    match cli.number.as_deref() {
        Some(number) => run_once(number, settings.output_format),
        None => match repl::run_repl(&settings) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error reading input: {e}");
                ExitCode::FAILURE
            }
        },
    }
}
