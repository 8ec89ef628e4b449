use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use doccheck_utils::types::ConfigSource;

/// Default content root, relative to the project root
pub const DEFAULT_CONTENT_ROOT: &str = "content";
/// Locale that every version must carry
pub const DEFAULT_SOURCE_LOCALE: &str = "en-US";
/// Name of the documentation directory inside each locale directory
pub const DEFAULT_DOC_DIR: &str = "doc";
/// A realistic tree has strictly more than one version
pub const DEFAULT_MIN_VERSIONS: usize = 2;
/// Manifest holding the supported-version list, relative to the project root
pub const DEFAULT_MANIFEST: &str = "package.json";
/// Manifest key holding the supported-version list
pub const DEFAULT_MANIFEST_KEY: &str = "supportedVersions";
/// Extension every documentation file must carry (without the dot)
pub const DEFAULT_EXTENSION: &str = "md";

/// What to do when a documentation file has the wrong extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionPolicy {
    /// Report the file and fail the check (default)
    #[default]
    Enforce,
    /// Report the file as a warning
    Warn,
}

impl std::fmt::Display for ExtensionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enforce => write!(f, "enforce"),
            Self::Warn => write!(f, "warn"),
        }
    }
}

impl FromStr for ExtensionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enforce" => Ok(Self::Enforce),
            "warn" => Ok(Self::Warn),
            other => Err(format!(
                "unknown extension policy '{other}' (expected 'enforce' or 'warn')"
            )),
        }
    }
}

/// `[content]` section: where the tree lives and how it is shaped
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    pub root: Option<PathBuf>,
    pub source_locale: Option<String>,
    pub doc_dir: Option<String>,
    pub min_versions: Option<usize>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: Some(PathBuf::from(DEFAULT_CONTENT_ROOT)),
            source_locale: Some(DEFAULT_SOURCE_LOCALE.to_string()),
            doc_dir: Some(DEFAULT_DOC_DIR.to_string()),
            min_versions: Some(DEFAULT_MIN_VERSIONS),
        }
    }
}

/// `[versions]` section: the supported-version list, inline or from a manifest
///
/// An inline `supported` list takes precedence over the manifest.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionsConfig {
    pub supported: Option<Vec<String>>,
    pub manifest: Option<PathBuf>,
    pub manifest_key: Option<String>,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            supported: None,
            manifest: Some(PathBuf::from(DEFAULT_MANIFEST)),
            manifest_key: Some(DEFAULT_MANIFEST_KEY.to_string()),
        }
    }
}

/// `[checks]` section: tuning for the Markdown-only check
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChecksConfig {
    pub extension: Option<String>,
    pub extension_policy: Option<ExtensionPolicy>,
    /// Globs (relative to each `doc` directory) exempt from the extension check
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            extension: Some(DEFAULT_EXTENSION.to_string()),
            extension_policy: Some(ExtensionPolicy::Enforce),
            ignore: Vec::new(),
        }
    }
}

/// Configuration for doccheck operations.
///
/// `Config` provides hierarchical configuration with discovery and precedence:
/// CLI arguments > config file > built-in defaults.
///
/// # Discovery
///
/// Use [`Config::discover()`] for CLI-like behavior that searches for
/// `.doccheck/config.toml` upward from the current directory, stopping at a
/// repository root. Relative paths in the file are resolved against the
/// project root (the directory holding `.doccheck/`); relative paths given on
/// the command line are resolved against the working directory.
///
/// # Programmatic Configuration
///
/// Use [`Config::builder()`] to construct a `Config` without touching the
/// filesystem or environment.
///
/// # Configuration File Format
///
/// ```toml
/// [content]
/// root = "content"
/// source_locale = "en-US"
/// doc_dir = "doc"
/// min_versions = 2
///
/// [versions]
/// supported = ["3.4", "3.5"]
/// manifest = "package.json"
/// manifest_key = "supportedVersions"
///
/// [checks]
/// extension = "md"
/// extension_policy = "enforce"
/// ignore = ["**/*.png"]
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub content: ContentConfig,
    pub versions: VersionsConfig,
    pub checks: ChecksConfig,
    /// Directory that relative file paths were resolved against
    pub project_root: PathBuf,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
    pub source_attribution: HashMap<String, ConfigSource>,
}

impl Config {
    /// Resolved content root
    #[must_use]
    pub fn content_root(&self) -> PathBuf {
        self.content
            .root
            .clone()
            .unwrap_or_else(|| self.project_root.join(DEFAULT_CONTENT_ROOT))
    }

    #[must_use]
    pub fn source_locale(&self) -> &str {
        self.content
            .source_locale
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_LOCALE)
    }

    #[must_use]
    pub fn doc_dir(&self) -> &str {
        self.content.doc_dir.as_deref().unwrap_or(DEFAULT_DOC_DIR)
    }

    #[must_use]
    pub fn min_versions(&self) -> usize {
        self.content.min_versions.unwrap_or(DEFAULT_MIN_VERSIONS)
    }

    #[must_use]
    pub fn extension(&self) -> &str {
        self.checks.extension.as_deref().unwrap_or(DEFAULT_EXTENSION)
    }

    #[must_use]
    pub fn extension_policy(&self) -> ExtensionPolicy {
        self.checks.extension_policy.unwrap_or_default()
    }

    /// Resolved manifest path, if the version list comes from a manifest
    #[must_use]
    pub fn manifest_path(&self) -> Option<&Path> {
        self.versions.manifest.as_deref()
    }

    #[must_use]
    pub fn manifest_key(&self) -> &str {
        self.versions
            .manifest_key
            .as_deref()
            .unwrap_or(DEFAULT_MANIFEST_KEY)
    }
}
