//! Scan configuration.
//!
//! [`ScanOptions`] is the validated set of switches a [`ScanSession`] runs
//! with. It is normally built from the `scan` subcommand arguments via
//! [`TryFrom<&ScanArgs>`], which is where invocation errors are raised.
//!
//! [`ScanSession`]: crate::duplicates::ScanSession

use crate::cli::ScanArgs;
use crate::error::InvocationError;

/// Options controlling one scan session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Classify files by base name.
    pub check_names: bool,
    /// Classify files by content digest.
    pub check_content: bool,
    /// Index and report absolute paths.
    pub use_absolute_paths: bool,
    /// Hashing workers; `1` hashes on the scanning thread.
    pub io_threads: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            check_names: true,
            check_content: true,
            use_absolute_paths: false,
            io_threads: 1,
        }
    }
}

impl ScanOptions {
    /// Enable or disable name classification.
    #[must_use]
    pub fn with_check_names(mut self, enabled: bool) -> Self {
        self.check_names = enabled;
        self
    }

    /// Enable or disable content classification.
    #[must_use]
    pub fn with_check_content(mut self, enabled: bool) -> Self {
        self.check_content = enabled;
        self
    }

    /// Enable or disable absolute path normalization.
    #[must_use]
    pub fn with_absolute_paths(mut self, enabled: bool) -> Self {
        self.use_absolute_paths = enabled;
        self
    }

    /// Set the number of hashing workers (at least 1).
    #[must_use]
    pub fn with_io_threads(mut self, threads: usize) -> Self {
        self.io_threads = threads.max(1);
        self
    }

    /// Reject option sets a session cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::NothingToCheck`] when both checks are off,
    /// or [`InvocationError::InvalidThreadCount`] for zero hashing workers.
    pub fn validate(&self) -> Result<(), InvocationError> {
        if !self.check_names && !self.check_content {
            return Err(InvocationError::NothingToCheck);
        }
        if self.io_threads == 0 {
            return Err(InvocationError::InvalidThreadCount(self.io_threads));
        }
        Ok(())
    }
}

impl TryFrom<&ScanArgs> for ScanOptions {
    type Error = InvocationError;

    fn try_from(args: &ScanArgs) -> Result<Self, Self::Error> {
        if args.dirs.is_empty() {
            return Err(InvocationError::NoDirectories);
        }
        if args.io_threads == 0 {
            return Err(InvocationError::InvalidThreadCount(args.io_threads));
        }

        let options = Self::default()
            .with_check_names(!args.skip_name)
            .with_check_content(!args.skip_hash)
            .with_absolute_paths(args.absolute)
            .with_io_threads(args.io_threads);
        options.validate()?;
        Ok(options)
    }
}
