//! Scan session orchestrating traversal, hashing and classification.
//!
//! # Overview
//!
//! A [`ScanSession`] owns all mutable state of one invocation: the identity
//! indexes, the duplicate records and the per-path error set. Roots are
//! walked one after another; every regular file is normalized and then
//! classified by name and/or content. Failures are recorded against the
//! failing path and the scan carries on.
//!
//! A path reached a second time (for example through overlapping roots) is
//! skipped, so a file is never reported as a duplicate of itself.
//!
//! When the session is done it is turned into a read-only [`ScanReport`].
//!
//! # Parallel hashing
//!
//! With `io_threads > 1` files are collected in traversal order into small
//! batches, each batch is hashed on a bounded rayon pool, and the results are
//! classified sequentially in traversal order. Reports are identical to a
//! single-threaded scan.
//!
//! # Example
//!
//! ```no_run
//! use doppler::config::ScanOptions;
//! use doppler::duplicates::ScanSession;
//!
//! let options = ScanOptions::default().with_absolute_paths(true);
//! let report = ScanSession::new(options)?.scan(&["photos", "backup"]);
//! for (path, err) in report.errors() {
//!     eprintln!("{path}: {err}");
//! }
//! for path in report.flat_duplicate_paths() {
//!     println!("{path}");
//! }
//! # Ok::<(), doppler::error::InvocationError>(())
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::groups::DuplicateAggregator;
use super::index::{IdentityIndex, Resolution};
use crate::config::ScanOptions;
use crate::error::InvocationError;
use crate::scanner::path_utils::{absolutize, base_name, to_slash};
use crate::scanner::{ContentToken, HashError, Hasher, ScanError, Walker};

/// Files handed to the hashing pool at once.
const HASH_BATCH_SIZE: usize = 256;

/// A discovered file: the path traversal produced and its normalized identity.
#[derive(Debug)]
struct FileVisit {
    input: PathBuf,
    normalized: String,
}

/// Mutable state of one duplicate scan.
#[derive(Debug)]
pub struct ScanSession {
    options: ScanOptions,
    hasher: Hasher,
    pool: Option<rayon::ThreadPool>,
    index: IdentityIndex,
    duplicates: DuplicateAggregator,
    errors: BTreeMap<String, ScanError>,
    visited: HashSet<String>,
    files_scanned: usize,
}

impl ScanSession {
    /// Create a session with the given options.
    ///
    /// # Errors
    ///
    /// Returns an [`InvocationError`] if the options are rejected by
    /// [`ScanOptions::validate`]; nothing is scanned in that case.
    pub fn new(options: ScanOptions) -> Result<Self, InvocationError> {
        options.validate()?;
        Ok(Self::with_valid_options(options))
    }

    /// Create a session checking names and content with relative paths.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::with_valid_options(ScanOptions::default())
    }

    fn with_valid_options(options: ScanOptions) -> Self {
        let pool = if options.check_content && options.io_threads > 1 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(options.io_threads)
                .build()
            {
                Ok(pool) => Some(pool),
                Err(e) => {
                    log::warn!("Failed to create hashing pool, hashing sequentially: {}", e);
                    None
                }
            }
        } else {
            None
        };

        Self {
            options,
            hasher: Hasher::new(),
            pool,
            index: IdentityIndex::new(),
            duplicates: DuplicateAggregator::new(),
            errors: BTreeMap::new(),
            visited: HashSet::new(),
            files_scanned: 0,
        }
    }

    /// Replace the content hasher, e.g. to tune its read buffer.
    #[must_use]
    pub fn with_hasher(mut self, hasher: Hasher) -> Self {
        self.hasher = hasher;
        self
    }

    /// Scan every root in order and finalize the session.
    #[must_use]
    pub fn scan<P: AsRef<Path>>(mut self, roots: &[P]) -> ScanReport {
        self.scan_dirs(roots);
        self.finish()
    }

    /// Scan every root in order.
    ///
    /// A root that cannot be read is recorded under its own key; the
    /// remaining roots are still scanned.
    pub fn scan_dirs<P: AsRef<Path>>(&mut self, roots: &[P]) {
        log::info!("Starting scan of {} path(s)", roots.len());
        for root in roots {
            self.scan_dir(root.as_ref());
        }
    }

    /// Scan a single root.
    pub fn scan_dir(&mut self, root: &Path) {
        log::info!("Scanning {}", root.display());

        let walker = Walker::new(root);
        let mut batch = Vec::with_capacity(HASH_BATCH_SIZE);
        for entry in walker.walk() {
            match entry {
                Ok(path) => {
                    batch.push(path);
                    if batch.len() >= HASH_BATCH_SIZE {
                        self.process_batch(&mut batch);
                    }
                }
                Err(err) => {
                    let key = err.path().map_or_else(|| path_key(root), path_key);
                    self.record_error(key, err);
                }
            }
        }
        self.process_batch(&mut batch);
    }

    /// Classify one file as if traversal had just produced `input`.
    pub fn visit_file(&mut self, input: &Path) {
        let visit = self.prepare(input.to_path_buf());
        if !self.mark_visited(&visit) {
            return;
        }
        let token = self
            .options
            .check_content
            .then(|| self.hasher.full_hash(Path::new(&visit.normalized)));
        self.classify(visit, token);
    }

    /// Whether any error has been recorded so far.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether any duplicate has been recorded so far.
    #[must_use]
    pub fn found_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Finalize the session into a read-only report.
    #[must_use]
    pub fn finish(self) -> ScanReport {
        log::info!(
            "Scan complete: {} files, {} with duplicates, {} errors",
            self.files_scanned,
            self.duplicates.len(),
            self.errors.len()
        );
        ScanReport {
            duplicates: self.duplicates,
            errors: self.errors,
            files_scanned: self.files_scanned,
        }
    }

    fn process_batch(&mut self, batch: &mut Vec<PathBuf>) {
        if batch.is_empty() {
            return;
        }
        let mut visits = Vec::with_capacity(batch.len());
        for input in batch.drain(..) {
            let visit = self.prepare(input);
            if self.mark_visited(&visit) {
                visits.push(visit);
            }
        }
        let tokens = self.hash_batch(&visits);
        for (visit, token) in visits.into_iter().zip(tokens) {
            self.classify(visit, token);
        }
    }

    /// Hash a batch, keeping results aligned with `visits`.
    fn hash_batch(
        &self,
        visits: &[FileVisit],
    ) -> Vec<Option<Result<ContentToken, HashError>>> {
        if !self.options.check_content {
            return visits.iter().map(|_| None).collect();
        }
        let hasher = &self.hasher;
        let hash = |v: &FileVisit| Some(hasher.full_hash(Path::new(&v.normalized)));
        match &self.pool {
            Some(pool) => pool.install(|| visits.par_iter().map(hash).collect()),
            None => visits.iter().map(hash).collect(),
        }
    }

    fn prepare(&mut self, input: PathBuf) -> FileVisit {
        let normalized = if self.options.use_absolute_paths {
            match absolutize(&input) {
                Ok(abs) => to_slash(&abs),
                Err(source) => {
                    log::warn!("Cannot make {} absolute: {}", input.display(), source);
                    let fallback = to_slash(&input);
                    self.record_error(
                        path_key(&input),
                        ScanError::Absolutize {
                            path: input.clone(),
                            source,
                        },
                    );
                    fallback
                }
            }
        } else {
            to_slash(&input)
        };
        FileVisit { input, normalized }
    }

    /// Returns `false` if this normalized path was already classified.
    fn mark_visited(&mut self, visit: &FileVisit) -> bool {
        if self.visited.insert(visit.normalized.clone()) {
            true
        } else {
            log::debug!("Already scanned, skipping: {}", visit.normalized);
            false
        }
    }

    fn classify(&mut self, visit: FileVisit, token: Option<Result<ContentToken, HashError>>) {
        self.files_scanned += 1;
        log::trace!("Classifying {}", visit.normalized);
        let path = visit.normalized.as_str();

        if self.options.check_names {
            if let Resolution::Existing(first) =
                self.index.resolve_by_name(base_name(path), path)
            {
                self.duplicates.record_name_duplicate(first, path);
            }
        }

        match token {
            None => {}
            Some(Ok(token)) => {
                log::trace!("Content token {} for {}", token, path);
                if let Resolution::Existing(first) = self.index.resolve_by_content(token, path) {
                    self.duplicates.record_content_duplicate(first, path);
                }
            }
            Some(Err(err)) => {
                match &err {
                    HashError::NotFound(_) => {
                        log::debug!("File vanished before hashing: {}", path);
                    }
                    _ => log::warn!("{}", err),
                }
                self.record_error(path_key(&visit.input), err.into());
            }
        }
    }

    /// Keep the first error recorded for `key`.
    fn record_error(&mut self, key: String, err: ScanError) {
        self.errors.entry(key).or_insert(err);
    }
}

fn path_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Finalized, read-only result of a scan session.
#[derive(Debug)]
pub struct ScanReport {
    duplicates: DuplicateAggregator,
    errors: BTreeMap<String, ScanError>,
    files_scanned: usize,
}

impl ScanReport {
    /// Whether any path failed during the scan.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Whether at least one duplicate was found.
    #[must_use]
    pub fn found_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Representative path → record, in discovery order.
    #[must_use]
    pub fn duplicates(&self) -> &DuplicateAggregator {
        &self.duplicates
    }

    /// Every path involved in a duplicate relationship, deduplicated.
    ///
    /// See [`DuplicateAggregator::all_duplicate_paths`] for the ordering.
    #[must_use]
    pub fn flat_duplicate_paths(&self) -> Vec<String> {
        self.duplicates.all_duplicate_paths()
    }

    /// Input path → error, sorted by path.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<String, ScanError> {
        &self.errors
    }

    /// Number of files classified.
    #[must_use]
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }
}
