//! Path normalization utilities.
//!
//! Every visited file is identified by a normalized string: forward-slash
//! separated, and optionally absolute. This normalized form is used both as
//! the index identity and in reports, so two roots that reach the same file
//! through different relative prefixes collapse to one path when
//! absolutization is enabled.
//!
//! # Example
//!
//! ```
//! use doppler::scanner::path_utils::{base_name, to_slash};
//! use std::path::Path;
//!
//! let p = to_slash(Path::new("docs/notes/todo.txt"));
//! assert_eq!(p, "docs/notes/todo.txt");
//! assert_eq!(base_name(&p), "todo.txt");
//! ```

use std::path::{Path, PathBuf};

/// Render `path` with `/` as the only separator.
///
/// Non-UTF-8 components are replaced lossily.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}

/// Make `path` absolute against the current directory.
///
/// This is purely lexical: symlinks are not resolved and the path does not
/// need to exist.
///
/// # Errors
///
/// Fails if the path is empty or the current directory cannot be determined.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Final component of a slash-normalized path.
///
/// Trailing slashes are ignored; a path without any separator is returned
/// unchanged.
#[must_use]
pub fn base_name(normalized: &str) -> &str {
    let trimmed = normalized.trim_end_matches('/');
    if trimmed.is_empty() {
        return normalized;
    }
    match trimmed.rfind('/') {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}
