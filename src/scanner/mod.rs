//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Deterministic directory walking using walkdir
//! - Content hashing with BLAKE3 (streaming)
//! - Path normalization for indexing and reporting
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: BLAKE3 file hashing
//! - [`path_utils`]: Slash normalization, absolutization, base names
//!
//! # Example
//!
//! ```no_run
//! use doppler::scanner::{Hasher, Walker};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! for entry in Walker::new(Path::new(".")).walk() {
//!     match entry {
//!         Ok(path) => match hasher.full_hash(&path) {
//!             Ok(token) => println!("{token}  {}", path.display()),
//!             Err(e) => eprintln!("Warning: {e}"),
//!         },
//!         Err(e) => eprintln!("Warning: {e}"),
//!     }
//! }
//! ```

pub mod hasher;
pub mod path_utils;
pub mod walker;

use std::path::{Path, PathBuf};

pub use hasher::{ContentToken, Hasher, DEFAULT_BUFFER_SIZE};
pub use walker::Walker;

/// Errors that can occur during directory scanning.
///
/// These are never raised mid-scan; the session records them per path.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when accessing a file or directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// A directory or entry could not be enumerated.
    #[error("Cannot read {path}: {source}")]
    Traversal {
        /// Directory (or entry) that could not be read
        path: PathBuf,
        /// The underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// The path could not be made absolute.
    #[error("Cannot resolve absolute path for {path}: {source}")]
    Absolutize {
        /// Path as produced by traversal
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be hashed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl ScanError {
    /// The path this error is attributed to, if it carries one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PermissionDenied(path) | Self::NotFound(path) => Some(path.as_path()),
            Self::Traversal { path, .. } | Self::Absolutize { path, .. } => Some(path.as_path()),
            Self::Hash(err) => Some(err.path()),
        }
    }
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    /// The file that failed to hash.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound(path) | Self::PermissionDenied(path) => path.as_path(),
            Self::Io { path, .. } => path.as_path(),
        }
    }

    /// Classify an I/O error raised while hashing `path`.
    pub(crate) fn from_io(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source: error,
            },
        }
    }
}
