use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Library-level error type with rich context and user-friendly reporting.
///
/// `DocCheckError` is the error type returned by doccheck library operations
/// that cannot be expressed as a check outcome. A failed check is *not* an
/// error: it is reported inside the `LayoutReport`. Errors are reserved for
/// things that prevent the checks from running at all (bad configuration,
/// unreadable manifest, report serialization).
///
/// # Exit Code Mapping
///
/// | Exit Code | Error Type |
/// |-----------|------------|
/// | 2 | Configuration/CLI argument errors |
/// | 1 | Other errors |
///
/// # Example
///
/// ```rust
/// use doccheck_utils::error::{ConfigError, DocCheckError};
/// use doccheck_utils::exit_codes::ExitCode;
///
/// let err = DocCheckError::Config(ConfigError::MissingRequired("versions.supported".to_string()));
/// assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
/// assert!(err.display_for_user().contains("Suggestions:"));
/// ```
#[derive(Error, Debug)]
pub enum DocCheckError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization failed: {reason}")]
    Serialization { reason: String },
}

/// Trait for providing user-friendly error reporting with context and suggestions
pub trait UserFriendlyError {
    /// Get a user-friendly error message
    fn user_message(&self) -> String;

    /// Get contextual information about the error
    fn context(&self) -> Option<String>;

    /// Get suggested actions to resolve the error
    fn suggestions(&self) -> Vec<String>;

    /// Get the error category for grouping similar errors
    fn category(&self) -> ErrorCategory;
}

/// Categories of errors for better organization and handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "Configuration"),
            Self::Output => write!(f, "Output"),
        }
    }
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration file: {0}")]
    InvalidFile(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found at {path}")]
    NotFound { path: String },

    #[error("Configuration discovery failed: {reason}")]
    DiscoveryFailed { reason: String },

    #[error("Cannot read supported versions from manifest {path}: {reason}")]
    Manifest { path: String, reason: String },
}

impl UserFriendlyError for ConfigError {
    fn user_message(&self) -> String {
        match self {
            Self::InvalidFile(reason) => {
                format!("Configuration file has invalid format: {reason}")
            }
            Self::MissingRequired(key) => {
                format!("Required configuration '{key}' is missing")
            }
            Self::InvalidValue { key, value } => {
                format!("Configuration '{key}' has invalid value: {value}")
            }
            Self::NotFound { path } => {
                format!("Configuration file not found: {path}")
            }
            Self::DiscoveryFailed { reason } => {
                format!("Failed to discover configuration: {reason}")
            }
            Self::Manifest { path, reason } => {
                format!("Could not read the supported-version list from {path}: {reason}")
            }
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::InvalidFile(_) => Some(
                "Configuration files must be valid TOML with optional [content], [versions] and [checks] sections."
                    .to_string(),
            ),
            Self::MissingRequired(_) => Some(
                "doccheck needs to know which product versions the content tree must contain."
                    .to_string(),
            ),
            Self::InvalidValue { key, .. } => Some(format!(
                "The '{key}' configuration option has specific format requirements."
            )),
            Self::NotFound { .. } => Some(
                "doccheck searches for .doccheck/config.toml starting from the current directory upward."
                    .to_string(),
            ),
            Self::DiscoveryFailed { .. } => Some(
                "Configuration discovery walks the directory tree looking for .doccheck/config.toml."
                    .to_string(),
            ),
            Self::Manifest { .. } => Some(
                "When [versions].supported is not set, the version list is read from a JSON manifest key holding an array of strings."
                    .to_string(),
            ),
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidFile(_) => vec![
                "Check the TOML syntax using a TOML validator".to_string(),
                "Compare with the example configuration in the documentation".to_string(),
            ],
            Self::MissingRequired(key) => vec![
                format!("Set '{key}' in .doccheck/config.toml"),
                "Pass --supported-version once per version on the command line".to_string(),
                "Point --manifest at a package.json with a supportedVersions array".to_string(),
            ],
            Self::InvalidValue { key, .. } => match key.as_str() {
                "source_locale" => vec![
                    "Use a locale identifier such as 'en-US'".to_string(),
                    "Locale names are matched exactly and case-sensitively".to_string(),
                ],
                "extension_policy" => vec!["Use 'enforce' or 'warn'".to_string()],
                "versions.supported" => vec![
                    "Remove duplicate entries from the supported-version list".to_string(),
                    "Make sure the list is not empty".to_string(),
                ],
                "doc_dir" => vec!["Use a single directory name such as 'doc'".to_string()],
                _ => vec![
                    "Check the documentation for valid values for this option".to_string(),
                    "Remove the option to use the default value".to_string(),
                ],
            },
            Self::NotFound { .. } => vec![
                "Create .doccheck/config.toml in your project root".to_string(),
                "Use CLI flags instead of a configuration file".to_string(),
            ],
            Self::DiscoveryFailed { .. } => vec![
                "Check read permissions on the current directory and its parents".to_string(),
                "Use --config <path> to specify the configuration file explicitly".to_string(),
            ],
            Self::Manifest { path, .. } => vec![
                format!("Check that {path} exists and is valid JSON"),
                "Check --manifest-key / [versions].manifest_key names an array of strings"
                    .to_string(),
                "Set [versions].supported to list versions inline instead".to_string(),
            ],
        }
    }

    fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Errors raised while reading the content tree
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {reason}")]
    Walk { path: PathBuf, reason: String },

    #[error("Entry name is not valid UTF-8 under {path}")]
    NonUtf8Name { path: PathBuf },
}

impl LayoutError {
    /// True when the underlying cause is a missing file or directory.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::ReadDir { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl UserFriendlyError for DocCheckError {
    fn user_message(&self) -> String {
        match self {
            Self::Config(err) => err.user_message(),
            Self::Serialization { reason } => format!("Failed to render the report: {reason}"),
        }
    }

    fn context(&self) -> Option<String> {
        match self {
            Self::Config(err) => err.context(),
            Self::Serialization { .. } => None,
        }
    }

    fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Config(err) => err.suggestions(),
            Self::Serialization { .. } => {
                vec!["Re-run without --json to get the human-readable report".to_string()]
            }
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Config(err) => err.category(),
            Self::Serialization { .. } => ErrorCategory::Output,
        }
    }
}

impl DocCheckError {
    /// Get a user-friendly error message with context and actionable suggestions.
    ///
    /// ```text
    /// Error: <user message>
    ///
    /// Context: <context if available>
    ///
    /// Suggestions:
    ///   • <suggestion 1>
    /// ```
    #[must_use]
    pub fn display_for_user(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("Error: {}\n", self.user_message()));

        if let Some(ctx) = self.context() {
            output.push_str(&format!("\nContext: {ctx}\n"));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in suggestions {
                output.push_str(&format!("  • {suggestion}\n"));
            }
        }

        output
    }

    /// Map this error to the appropriate CLI exit code.
    #[must_use]
    pub fn to_exit_code(&self) -> crate::exit_codes::ExitCode {
        use crate::exit_codes::ExitCode;

        match self {
            DocCheckError::Config(_) => ExitCode::CLI_ARGS,
            _ => ExitCode::INTERNAL,
        }
    }
}
