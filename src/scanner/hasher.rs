//! BLAKE3 file hasher with streaming support.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing BLAKE3 digests
//! of file contents. Files are read front to back through a fixed-size
//! buffer, so memory use does not grow with file size.
//!
//! The resulting [`ContentToken`] is the content identity used by the
//! duplicate index: two files are content duplicates iff their tokens match.
//!
//! # Example
//!
//! ```no_run
//! use doppler::scanner::Hasher;
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let token = hasher.full_hash(Path::new("Cargo.toml")).unwrap();
//! assert_eq!(token.to_string().len(), 64);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::HashError;

/// Read buffer size used when none is configured (64 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Fixed-width content identity of a file (32-byte BLAKE3 digest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentToken([u8; 32]);

impl fmt::Display for ContentToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl From<blake3::Hash> for ContentToken {
    fn from(hash: blake3::Hash) -> Self {
        Self(*hash.as_bytes())
    }
}

/// Streaming BLAKE3 file hasher.
///
/// The hasher holds no per-file state and is `Sync`, so one instance can be
/// shared by every worker of the hashing pool.
#[derive(Debug, Clone)]
pub struct Hasher {
    buffer_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher with the default read buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Use a custom read buffer size (clamped to at least 1 byte).
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }

    /// Hash the entire content of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or fully read.
    pub fn full_hash(&self, path: &Path) -> Result<ContentToken, HashError> {
        let file = File::open(path).map_err(|e| HashError::from_io(path, e))?;
        self.hash_reader(file).map_err(|e| HashError::from_io(path, e))
    }

    /// Hash everything `reader` yields until EOF.
    ///
    /// # Errors
    ///
    /// Propagates any read error other than [`ErrorKind::Interrupted`].
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> std::io::Result<ContentToken> {
        let mut hasher = blake3::Hasher::new();
        let mut buffer = vec![0u8; self.buffer_size];
        loop {
            let n = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buffer[..n]);
        }
        Ok(hasher.finalize().into())
    }
}
