use chrono::Utc;
use std::time::Instant;
use tracing::warn;

use doccheck_utils::error::LayoutError;
use doccheck_utils::logging;
use doccheck_utils::types::{CheckStatus, LayoutCheck, LayoutReport};

use crate::checks::{self, markdown_only, source_locale, translations, versions};
use crate::options::LayoutOptions;

/// Runs the layout checks against one content tree
pub struct LayoutChecker {
    options: LayoutOptions,
}

impl LayoutChecker {
    #[must_use]
    pub fn new(options: LayoutOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Run all checks; warnings do not make the report fail
    #[must_use]
    pub fn run(&self) -> LayoutReport {
        self.run_strict(false)
    }

    /// Run all checks with optional strict mode
    ///
    /// In strict mode, warnings are treated as failures for the `ok` flag
    #[must_use]
    pub fn run_strict(&self, strict: bool) -> LayoutReport {
        let mut checks = vec![
            self.check_supported_versions(),
            self.check_source_locale(),
            self.check_markdown_only(),
            self.check_translations(),
        ];

        // Sort checks by name for stable output (required for JCS canonical emission)
        checks.sort_by(|a, b| a.name.cmp(&b.name));

        let has_fail = checks.iter().any(|c| c.status == CheckStatus::Fail);
        let has_warn = checks.iter().any(|c| c.status == CheckStatus::Warn);
        let ok = !has_fail && (!strict || !has_warn);

        LayoutReport {
            schema_version: "1".to_string(),
            emitted_at: Utc::now(),
            content_root: self.options.content_root.display().to_string(),
            ok,
            checks,
        }
    }

    #[must_use]
    pub fn check_supported_versions(&self) -> LayoutCheck {
        self.timed(checks::SUPPORTED_VERSIONS, versions::check)
    }

    #[must_use]
    pub fn check_source_locale(&self) -> LayoutCheck {
        self.timed(checks::SOURCE_LOCALE, source_locale::check)
    }

    #[must_use]
    pub fn check_markdown_only(&self) -> LayoutCheck {
        self.timed(checks::MARKDOWN_ONLY, markdown_only::check)
    }

    #[must_use]
    pub fn check_translations(&self) -> LayoutCheck {
        self.timed(checks::TRANSLATIONS, |_| Ok(translations::check()))
    }

    fn timed<F>(&self, name: &str, run: F) -> LayoutCheck
    where
        F: FnOnce(&LayoutOptions) -> Result<LayoutCheck, LayoutError>,
    {
        let root = self.options.content_root.display().to_string();
        let span = logging::check_span(name, &root);
        let _guard = span.enter();
        let start = Instant::now();

        let check = run(&self.options).unwrap_or_else(|e| {
            warn!(check = name, error = %e, "Layout check aborted");
            checks::aborted(name, &e)
        });

        logging::log_check_complete(&check, start.elapsed());
        check
    }
}
