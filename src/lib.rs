//! doppler - duplicate file locator
//!
//! Walks one or more directory trees and reports files that share a name
//! and/or their exact byte content (BLAKE3). Detection only; nothing is
//! modified.

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod output;
pub mod scanner;

use std::io::{self, Write};

use anyhow::Context;

use crate::cli::{Cli, Commands, ScanArgs};
use crate::config::ScanOptions;
use crate::duplicates::ScanSession;
use crate::error::ExitCode;
use crate::output::{JsonOutput, TextOutput};

/// Run the application for parsed command-line arguments.
///
/// Per-file scan errors are reported on stderr and do not fail the run.
///
/// # Errors
///
/// Returns an [`error::InvocationError`] for rejected arguments, or an I/O
/// error if the report cannot be written.
pub fn run_app(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Scan(args) => run_scan(&args),
    }
}

fn run_scan(args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let options = ScanOptions::try_from(args)?;
    log::debug!("Scan options: {:?}", options);

    let report = ScanSession::new(options)?.scan(args.dirs.as_slice());

    if report.has_errors() {
        let mut stderr = io::stderr().lock();
        TextOutput::new(&report)
            .write_errors(&mut stderr)
            .context("Failed to write scan errors")?;
    }

    let mut stdout = io::stdout().lock();
    if args.json {
        JsonOutput::new(&report)
            .write_to(&mut stdout, true)
            .context("Failed to write JSON report")?;
    } else {
        TextOutput::new(&report)
            .write_to(&mut stdout)
            .context("Failed to write report")?;
    }
    stdout.flush().context("Failed to flush stdout")?;

    Ok(ExitCode::Success)
}
