//! JSON output formatter for duplicate scan results.
//!
//! Provides the structured report for scripting: an object keyed by
//! representative path, in discovery order, with empty fields omitted.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "photos/a.jpg": {
//!     "nameDuplicates": ["backup/a.jpg"],
//!     "contentDuplicates": ["photos/copy-of-a.jpg"]
//!   }
//! }
//! ```
//!
//! A scan without duplicates renders as `{}`.

use std::io::Write;

use crate::duplicates::{DuplicateAggregator, ScanReport};

/// JSON rendering of a scan report.
#[derive(Debug, Clone, Copy)]
pub struct JsonOutput<'a> {
    duplicates: &'a DuplicateAggregator,
}

impl<'a> JsonOutput<'a> {
    /// Render the duplicate records of `report`.
    #[must_use]
    pub fn new(report: &'a ScanReport) -> Self {
        Self::from_duplicates(report.duplicates())
    }

    /// Render an aggregator directly.
    #[must_use]
    pub fn from_duplicates(duplicates: &'a DuplicateAggregator) -> Self {
        Self { duplicates }
    }

    /// Serialize to compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.duplicates)
    }

    /// Serialize to pretty-printed JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails (unlikely for valid data).
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.duplicates)
    }

    /// Write JSON followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        let json = if pretty {
            self.to_json_pretty()?
        } else {
            self.to_json()?
        };
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON output: {0}")]
    Io(#[from] std::io::Error),
}
