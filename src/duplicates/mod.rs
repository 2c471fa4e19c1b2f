//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Write-once identity indexes by name and by content
//! - Duplicate records attached to a representative path
//! - The scan session tying traversal, hashing and classification together

pub mod groups;
pub mod index;
pub mod session;

pub use groups::{DuplicateAggregator, DuplicateRecord};
pub use index::{FirstSeenIndex, IdentityIndex, Resolution};
pub use session::{ScanReport, ScanSession};
