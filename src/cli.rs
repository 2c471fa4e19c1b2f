//! Command-line interface definitions for doppler.
//!
//! This module defines all CLI arguments using the clap derive API. Global
//! options control log verbosity; the `scan` subcommand carries the scan
//! switches.
//!
//! # Example
//!
//! ```bash
//! # Flat list of every path involved in a duplicate
//! doppler scan ~/Pictures /mnt/backup/Pictures
//!
//! # Full report as JSON, absolute paths, content check only
//! doppler scan --json --absolute --skip-name ~/Downloads
//!
//! # Verbose mode for debugging
//! doppler -v scan ~/Downloads
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Locates duplicate files by name and/or hash.
///
/// Directories are searched recursively. If multiple directories are given,
/// the search spans all of them. Symlinks are not followed.
#[derive(Debug, Parser)]
#[command(name = "doppler")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print fatal errors as a JSON object on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan directories for duplicate files
    Scan(ScanArgs),
}

/// Arguments for the scan subcommand.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Directories to scan
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Print result in JSON format (more details)
    #[arg(short, long)]
    pub json: bool,

    /// Print absolute file paths
    #[arg(short, long)]
    pub absolute: bool,

    /// Skip check for duplicate file names
    #[arg(long)]
    pub skip_name: bool,

    /// Skip check for duplicate file content
    #[arg(long)]
    pub skip_hash: bool,

    /// Number of threads used for hashing file content
    #[arg(long, value_name = "N", default_value_t = 1, env = "DOPPLER_IO_THREADS")]
    pub io_threads: usize,
}
