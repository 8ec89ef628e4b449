//! Documentation layout checks
//!
//! Verifies that a content tree laid out as `<root>/<version>/<locale>/doc/**`
//! carries every supported version, an English source for each version, and
//! only Markdown documentation files.
//!
//! ```rust,no_run
//! use doccheck_layout::{LayoutChecker, LayoutOptions};
//!
//! let options = LayoutOptions::new("content", ["3.4", "3.5"]);
//! let report = LayoutChecker::new(options).run();
//! assert!(report.ok);
//! ```

pub use doccheck_utils::types::{CheckStatus, LayoutCheck, LayoutCondition, LayoutReport};

pub mod checks;
pub mod json;
pub mod listing;

mod checker;
mod options;

pub use checker::LayoutChecker;
pub use checks::translations::PENDING_REASON;
pub use json::emit_report_json;
pub use options::LayoutOptions;
