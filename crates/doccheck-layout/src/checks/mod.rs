//! The named layout checks.
//!
//! Each check evaluates its conditions against a fresh listing of the content
//! tree. A check returns `Err` only when the tree could not be read; the
//! runner turns that into a failed check so the remaining checks still run.

pub mod markdown_only;
pub mod source_locale;
pub mod translations;
pub mod versions;

use doccheck_utils::error::LayoutError;
use doccheck_utils::types::{CheckStatus, LayoutCheck};

/// Configured supported versions match the version directories exactly
pub const SUPPORTED_VERSIONS: &str = "supported_versions";
/// Every version carries the source locale
pub const SOURCE_LOCALE: &str = "source_locale";
/// Every doc directory is non-empty and holds only Markdown files
pub const MARKDOWN_ONLY: &str = "markdown_only";
/// Translated content for every version (not yet executed)
pub const TRANSLATIONS: &str = "translations";

/// Show at most this many offending entries in a condition
const MAX_LISTED: usize = 10;

/// A check that could not finish because the tree was unreadable.
pub(crate) fn aborted(name: &str, error: &LayoutError) -> LayoutCheck {
    LayoutCheck {
        name: name.to_string(),
        status: CheckStatus::Fail,
        details: format!("Check aborted: {error}"),
        conditions: Vec::new(),
    }
}

/// `[a, b, c]`
pub(crate) fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
    format!("[{joined}]")
}

/// `a, b, c` capped at [`MAX_LISTED`] entries, then `and N more`.
pub(crate) fn summarize<S: AsRef<str>>(items: &[S]) -> String {
    let shown = items
        .iter()
        .take(MAX_LISTED)
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > MAX_LISTED {
        format!("{shown}, and {} more", items.len() - MAX_LISTED)
    } else {
        shown
    }
}
