//! Directory listing primitives shared by the layout checks.
//!
//! Listings are complete and sorted by byte order of their UTF-8 names so
//! every check sees the tree in the same order.

use camino::{Utf8Path, Utf8PathBuf};
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use doccheck_utils::error::LayoutError;

/// Names of the immediate subdirectories of `path`, sorted.
///
/// Plain files are skipped. Symlinks are followed, so a link to a directory
/// counts as a directory.
pub fn list_dirs(path: &Path) -> Result<Vec<String>, LayoutError> {
    let entries = std::fs::read_dir(path).map_err(|source| LayoutError::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LayoutError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry
            .file_name()
            .into_string()
            .map_err(|_| LayoutError::NonUtf8Name {
                path: path.to_path_buf(),
            })?;
        names.push(name);
    }

    names.sort();
    debug!(path = %path.display(), count = names.len(), "Listed directories");
    Ok(names)
}

/// Every file below `dir`, recursively, as paths relative to `dir` with `/`
/// separators, sorted. Directory entries are not included.
///
/// A missing `dir` is reported as [`LayoutError::ReadDir`] with a
/// `NotFound` source so callers can tell it apart from other failures.
pub fn walk_files(dir: &Path) -> Result<Vec<Utf8PathBuf>, LayoutError> {
    std::fs::metadata(dir).map_err(|source| LayoutError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| LayoutError::Walk {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(dir)
            .map_err(|e| LayoutError::Walk {
                path: entry.path().to_path_buf(),
                reason: e.to_string(),
            })?;
        let relative = Utf8Path::from_path(relative).ok_or_else(|| LayoutError::NonUtf8Name {
            path: entry.path().to_path_buf(),
        })?;

        // Normalize separators so globs and reports are platform independent
        let joined = relative
            .components()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("/");
        files.push(Utf8PathBuf::from(joined));
    }

    files.sort();
    debug!(path = %dir.display(), count = files.len(), "Walked files");
    Ok(files)
}
