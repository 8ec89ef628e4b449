use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::DocCheckError;

use super::{ChecksConfig, Config, ConfigSource, ContentConfig, ExtensionPolicy, VersionsConfig};

impl Config {
    /// Create a builder for programmatic configuration.
    ///
    /// Use this when embedding doccheck in another tool or in tests, where
    /// config file discovery and the working directory should not matter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use doccheck_config::Config;
    ///
    /// let config = Config::builder()
    ///     .content_root("/srv/site/content")
    ///     .supported_versions(["3.4", "3.5"])
    ///     .build()
    ///     .expect("Failed to build config");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for programmatic configuration of doccheck.
///
/// # Source Attribution
///
/// All values set via the builder are attributed to `ConfigSource::Programmatic`
/// in the resulting `Config`'s source attribution map.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    project_root: Option<PathBuf>,
    content_root: Option<PathBuf>,
    supported_versions: Option<Vec<String>>,
    manifest: Option<PathBuf>,
    manifest_key: Option<String>,
    source_locale: Option<String>,
    doc_dir: Option<String>,
    min_versions: Option<usize>,
    extension: Option<String>,
    extension_policy: Option<ExtensionPolicy>,
    ignore: Vec<String>,
    verbose: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new `ConfigBuilder` with no values set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory that relative paths are resolved against. Default: `.`
    #[must_use]
    pub fn project_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_root = Some(path.into());
        self
    }

    /// Directory holding one subdirectory per version.
    #[must_use]
    pub fn content_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_root = Some(path.into());
        self
    }

    /// Inline supported-version list. Takes precedence over the manifest.
    #[must_use]
    pub fn supported_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_versions = Some(versions.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest = Some(path.into());
        self
    }

    #[must_use]
    pub fn manifest_key(mut self, key: impl Into<String>) -> Self {
        self.manifest_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn source_locale(mut self, locale: impl Into<String>) -> Self {
        self.source_locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn doc_dir(mut self, name: impl Into<String>) -> Self {
        self.doc_dir = Some(name.into());
        self
    }

    /// Minimum number of version directories the Markdown-only check accepts.
    #[must_use]
    pub fn min_versions(mut self, count: usize) -> Self {
        self.min_versions = Some(count);
        self
    }

    /// Required documentation file extension, without the leading dot.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    #[must_use]
    pub fn extension_policy(mut self, policy: ExtensionPolicy) -> Self {
        self.extension_policy = Some(policy);
        self
    }

    #[must_use]
    pub fn add_ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignore.push(pattern.into());
        self
    }

    #[must_use]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when a value fails validation (malformed locale,
    /// multi-component doc directory, invalid ignore glob, and so on).
    pub fn build(self) -> Result<Config, DocCheckError> {
        let mut source_attribution = HashMap::new();
        let programmatic = ConfigSource::Programmatic;

        let project_root = self.project_root.unwrap_or_else(|| PathBuf::from("."));

        let mut content = ContentConfig::default();
        content.root = Some(project_root.join(super::DEFAULT_CONTENT_ROOT));
        let mut versions = VersionsConfig::default();
        versions.manifest = Some(project_root.join(super::DEFAULT_MANIFEST));
        let mut checks = ChecksConfig::default();

        let mut set = |key: &str, is_set: bool| {
            let source = if is_set {
                programmatic.clone()
            } else {
                ConfigSource::Default
            };
            source_attribution.insert(key.to_string(), source);
        };

        set("content_root", self.content_root.is_some());
        set("supported_versions", self.supported_versions.is_some());
        set("manifest", self.manifest.is_some());
        set("manifest_key", self.manifest_key.is_some());
        set("source_locale", self.source_locale.is_some());
        set("doc_dir", self.doc_dir.is_some());
        set("min_versions", self.min_versions.is_some());
        set("extension", self.extension.is_some());
        set("extension_policy", self.extension_policy.is_some());
        set("ignore", !self.ignore.is_empty());
        set("verbose", self.verbose.is_some());

        if let Some(root) = self.content_root {
            content.root = Some(project_root.join(root));
        }
        if self.source_locale.is_some() {
            content.source_locale = self.source_locale;
        }
        if self.doc_dir.is_some() {
            content.doc_dir = self.doc_dir;
        }
        if self.min_versions.is_some() {
            content.min_versions = self.min_versions;
        }

        versions.supported = self.supported_versions;
        if let Some(manifest) = self.manifest {
            versions.manifest = Some(project_root.join(manifest));
        }
        if self.manifest_key.is_some() {
            versions.manifest_key = self.manifest_key;
        }

        if self.extension.is_some() {
            checks.extension = self.extension;
        }
        if self.extension_policy.is_some() {
            checks.extension_policy = self.extension_policy;
        }
        checks.ignore = self.ignore;

        let config = Config {
            content,
            versions,
            checks,
            project_root,
            config_path: None,
            verbose: self.verbose.unwrap_or(false),
            source_attribution,
        };

        config.validate()?;

        Ok(config)
    }
}
