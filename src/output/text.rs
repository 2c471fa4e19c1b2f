//! Plain-text output: the flat duplicate list and the error listing.

use std::io::{self, Write};

use crate::duplicates::ScanReport;

/// Line printed when the scan found nothing.
pub const NO_DUPLICATES_MESSAGE: &str = "No duplicates found!";

/// Flat, line-oriented rendering of a scan report.
#[derive(Debug, Clone, Copy)]
pub struct TextOutput<'a> {
    report: &'a ScanReport,
}

impl<'a> TextOutput<'a> {
    /// Wrap a finished report.
    #[must_use]
    pub fn new(report: &'a ScanReport) -> Self {
        Self { report }
    }

    /// Write one duplicate path per line, or [`NO_DUPLICATES_MESSAGE`].
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if !self.report.found_duplicates() {
            return writeln!(writer, "{NO_DUPLICATES_MESSAGE}");
        }
        for path in self.report.flat_duplicate_paths() {
            writeln!(writer, "{path}")?;
        }
        Ok(())
    }

    /// Write recorded errors as `path: message`, one per line, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_errors<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for (path, err) in self.report.errors() {
            writeln!(writer, "{path}: {err}")?;
        }
        Ok(())
    }
}
