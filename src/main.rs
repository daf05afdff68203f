//! # noop
//!
//! A calculator with no operators.
//!
//! ## Usage
//!
//! - Add once: `noop 29L8.1c829`
//! - Interactive prompt: `noop`
//! - JSON output: `noop --output-format json D.3`

use std::process::ExitCode;

/// Entry point for the CLI tool.
fn main() -> ExitCode {
    noop::cli::run_cli()
}
