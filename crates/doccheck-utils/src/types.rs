use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source of a configuration value.
///
/// Tracks where each configuration value came from so `doccheck config`
/// can explain the effective configuration.
///
/// # Example
///
/// ```rust
/// use doccheck_utils::types::ConfigSource;
///
/// let json = serde_json::to_string(&ConfigSource::Cli).unwrap();
/// assert_eq!(json, r#""cli""#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(
    any(test, feature = "test-utils"),
    derive(strum::VariantNames),
    strum(serialize_all = "lowercase")
)]
pub enum ConfigSource {
    /// Value provided via CLI argument (highest precedence).
    Cli,
    /// Value loaded from configuration file.
    Config,
    /// Value provided programmatically (e.g., `Config::builder()`).
    Programmatic,
    /// Built-in default value (lowest precedence).
    Default,
}

impl ConfigSource {
    /// Stable label used in text and JSON output
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cli => "cli",
            Self::Config => "config",
            Self::Programmatic => "programmatic",
            Self::Default => "default",
        }
    }
}

/// Status of a single layout check
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(
    any(test, feature = "test-utils"),
    derive(strum::VariantNames),
    strum(serialize_all = "snake_case")
)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
    /// Registered but intentionally not executed
    Skip,
}

impl CheckStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }
}

/// One evaluated assertion inside a check.
///
/// `actual` and `expected` carry the two values that were compared so a
/// failure can be diagnosed from the report alone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutCondition {
    /// Name of the condition (e.g. `"3.5"` or `"doc_files:3.5/en-US"`)
    pub name: String,
    /// Whether the condition held
    pub passed: bool,
    /// Value observed in the content tree
    pub actual: Option<String>,
    /// Value required for the condition to hold
    pub expected: Option<String>,
}

impl LayoutCondition {
    #[must_use]
    pub fn new(name: impl Into<String>, passed: bool) -> Self {
        Self {
            name: name.into(),
            passed,
            actual: None,
            expected: None,
        }
    }

    #[must_use]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

/// Result of one named check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutCheck {
    /// Name of the check
    pub name: String,
    /// Status of the check
    pub status: CheckStatus,
    /// Human-readable summary of the outcome
    pub details: String,
    /// Individual conditions evaluated (empty for skipped or aborted checks)
    pub conditions: Vec<LayoutCondition>,
}

impl LayoutCheck {
    /// Names of the conditions that did not hold
    #[must_use]
    pub fn failed_conditions(&self) -> Vec<&LayoutCondition> {
        self.conditions.iter().filter(|c| !c.passed).collect()
    }
}

/// Report for one run of the layout checks, matching the `--json` output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutReport {
    /// Schema version for this report format
    pub schema_version: String,
    /// RFC3339 UTC timestamp when the report was emitted
    pub emitted_at: DateTime<Utc>,
    /// Content root the checks ran against
    pub content_root: String,
    /// Overall result (false if any check failed, or warned in strict mode)
    pub ok: bool,
    /// Checks performed (sorted by name before emission)
    pub checks: Vec<LayoutCheck>,
}

impl LayoutReport {
    /// Look up a check by name
    #[must_use]
    pub fn check(&self, name: &str) -> Option<&LayoutCheck> {
        self.checks.iter().find(|c| c.name == name)
    }

    /// Count checks with the given status
    #[must_use]
    pub fn count(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}
