//! Structured error handling and exit codes.

use serde::Serialize;

/// Exit codes for the doppler binary.
///
/// Per-file scan errors are warnings and never change the exit code:
/// - 0: Scan completed (with or without duplicates or per-file errors)
/// - 1: General error (unexpected failure, e.g. writing output)
/// - 2: Invocation error (bad arguments, nothing scanned)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Scan completed.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// Invocation error: The command line was rejected before scanning.
    InvocationError = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DP000",
            Self::GeneralError => "DP001",
            Self::InvocationError => "DP002",
        }
    }

    /// Pick the exit code for an error returned by [`crate::run_app`].
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        if err.downcast_ref::<InvocationError>().is_some() {
            Self::InvocationError
        } else {
            Self::GeneralError
        }
    }
}

/// Command-line usage that is rejected before any scanning starts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvocationError {
    /// No directory was given.
    #[error("Need at least one directory")]
    NoDirectories,

    /// Both `--skip-name` and `--skip-hash` were given.
    #[error("Nothing to do if both name and hash check are skipped")]
    NothingToCheck,

    /// `--io-threads` was zero.
    #[error("Invalid I/O thread count: {0} (must be at least 1)")]
    InvalidThreadCount(usize),
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DP002")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
