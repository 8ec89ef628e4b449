//! doccheck - layout validation for versioned, localized documentation trees
//!
//! doccheck asserts that a content tree laid out as
//! `<root>/<version>/<locale>/doc/**` contains exactly the supported product
//! versions, an English source for every version, and only Markdown
//! documentation files.
//!
//! doccheck can be used in two ways:
//! - **CLI**: run `doccheck check` in CI; the exit code reports the outcome
//! - **Library**: build [`LayoutOptions`] and run a [`LayoutChecker`] directly
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Versions come from .doccheck/config.toml or package.json#supportedVersions
//! doccheck check
//!
//! # Canonical JSON report
//! doccheck check --json
//!
//! # Effective configuration with sources
//! doccheck config
//! ```
//!
//! # Quick Start (Library)
//!
//! ```rust,no_run
//! use doccheck::{Config, LayoutChecker, LayoutOptions};
//!
//! let config = Config::builder()
//!     .content_root("content")
//!     .supported_versions(["3.4", "3.5"])
//!     .build()?;
//! let report = LayoutChecker::new(LayoutOptions::from_config(&config)?).run();
//! for check in &report.checks {
//!     println!("{}: {}", check.name, check.status.as_str());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # JSON Contracts
//!
//! Reports are emitted in JCS (RFC 8785) canonical form. Use [`emit_jcs`] to
//! emit your own integrations the same way.

pub mod cli;
pub mod error_reporter;

pub use doccheck_config::{CliArgs, Config, ConfigBuilder, ExtensionPolicy};
pub use doccheck_layout::{
    CheckStatus, LayoutCheck, LayoutChecker, LayoutCondition, LayoutOptions, LayoutReport,
    emit_report_json,
};
pub use doccheck_utils::canonicalization::emit_jcs;
pub use doccheck_utils::error::{ConfigError, DocCheckError, LayoutError, UserFriendlyError};
pub use doccheck_utils::exit_codes::ExitCode;
pub use doccheck_utils::logging;
