use globset::GlobSet;
use std::path::PathBuf;

use doccheck_config::{
    Config, DEFAULT_DOC_DIR, DEFAULT_EXTENSION, DEFAULT_MIN_VERSIONS, DEFAULT_SOURCE_LOCALE,
    ExtensionPolicy,
};
use doccheck_utils::error::ConfigError;

/// Everything the checks need, resolved up front.
///
/// The checker never reads configuration files, the environment, or the
/// working directory on its own; callers build this from a [`Config`] or
/// directly in tests.
#[derive(Debug, Clone)]
pub struct LayoutOptions {
    pub content_root: PathBuf,
    /// Supported versions in declared order
    pub supported_versions: Vec<String>,
    pub source_locale: String,
    pub doc_dir: String,
    pub min_versions: usize,
    /// Required extension without the leading dot
    pub extension: String,
    pub extension_policy: ExtensionPolicy,
    /// Paths (relative to each doc directory) exempt from the extension check
    pub ignore: GlobSet,
}

impl LayoutOptions {
    /// Options with default shape settings for the given root and versions.
    #[must_use]
    pub fn new<I, S>(content_root: impl Into<PathBuf>, supported_versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            content_root: content_root.into(),
            supported_versions: supported_versions.into_iter().map(Into::into).collect(),
            source_locale: DEFAULT_SOURCE_LOCALE.to_string(),
            doc_dir: DEFAULT_DOC_DIR.to_string(),
            min_versions: DEFAULT_MIN_VERSIONS,
            extension: DEFAULT_EXTENSION.to_string(),
            extension_policy: ExtensionPolicy::default(),
            ignore: GlobSet::empty(),
        }
    }

    /// Resolve options from a loaded configuration.
    ///
    /// Reads the version manifest when no inline list is configured.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            content_root: config.content_root(),
            supported_versions: config.supported_versions()?,
            source_locale: config.source_locale().to_string(),
            doc_dir: config.doc_dir().to_string(),
            min_versions: config.min_versions(),
            extension: config.extension().to_string(),
            extension_policy: config.extension_policy(),
            ignore: config.ignore_globset()?,
        })
    }

    #[must_use]
    pub fn with_source_locale(mut self, locale: impl Into<String>) -> Self {
        self.source_locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_doc_dir(mut self, doc_dir: impl Into<String>) -> Self {
        self.doc_dir = doc_dir.into();
        self
    }

    #[must_use]
    pub fn with_min_versions(mut self, min_versions: usize) -> Self {
        self.min_versions = min_versions;
        self
    }

    #[must_use]
    pub fn with_extension_policy(mut self, policy: ExtensionPolicy) -> Self {
        self.extension_policy = policy;
        self
    }

    #[must_use]
    pub fn with_ignore(mut self, ignore: GlobSet) -> Self {
        self.ignore = ignore;
        self
    }
}
