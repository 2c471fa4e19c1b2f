//! Output formatters for duplicate scan results.
//!
//! This module provides the two renderings of a [`ScanReport`]:
//! - plain text: the flat duplicate list, one path per line
//! - JSON: the representative → record mapping, for scripting
//!
//! # Example
//!
//! ```no_run
//! use doppler::duplicates::ScanSession;
//! use doppler::output::{JsonOutput, TextOutput};
//!
//! let report = ScanSession::with_defaults().scan(&["."]);
//! let mut stdout = std::io::stdout();
//! TextOutput::new(&report).write_to(&mut stdout).unwrap();
//! JsonOutput::new(&report).write_to(&mut stdout, true).unwrap();
//! ```
//!
//! [`ScanReport`]: crate::duplicates::ScanReport

pub mod json;
pub mod text;

// Re-export main types
pub use json::{JsonOutput, JsonOutputError};
pub use text::TextOutput;
