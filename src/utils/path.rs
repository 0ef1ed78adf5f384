//! Storage path helpers.

use std::path::{Path, PathBuf};

/// Joins a reciter's relative storage path onto a base directory.
///
/// Catalog paths are written with a leading `/` (e.g. `/saad`) but are
/// always relative to `base`, so leading separators are stripped before
/// joining instead of letting them replace the base.
///
/// ```rust
/// use qari_dl::utils::join_relative;
/// use std::path::Path;
///
/// let dir = join_relative(Path::new("/storage/audio"), "/saad");
/// assert_eq!(dir, Path::new("/storage/audio/saad"));
/// ```
pub fn join_relative(base: &Path, relative: &str) -> PathBuf {
    let trimmed = relative.trim_start_matches(|c: char| c == '/' || c == '\\');
    if trimmed.is_empty() {
        base.to_path_buf()
    } else {
        base.join(trimmed)
    }
}
