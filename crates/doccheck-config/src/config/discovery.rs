use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, DocCheckError};

use super::{ChecksConfig, CliArgs, Config, ConfigSource, ContentConfig, ExtensionPolicy, VersionsConfig};

/// Directory holding the project-level configuration file
pub const CONFIG_DIR_NAME: &str = ".doccheck";
/// Project-level configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfig {
    content: Option<ContentConfig>,
    versions: Option<VersionsConfig>,
    checks: Option<ChecksConfig>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > file > defaults
    ///
    /// Uses the current working directory for config file discovery and for
    /// resolving relative CLI paths.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, DocCheckError> {
        let start_dir = std::env::current_dir().map_err(|e| ConfigError::DiscoveryFailed {
            reason: format!("cannot determine current directory: {e}"),
        })?;
        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover and load configuration starting from a specific directory
    ///
    /// This is the path-driven variant used by tests to avoid process-global state.
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self, DocCheckError> {
        let mut source_attribution = HashMap::new();

        let config_path = match &cli_args.config_path {
            Some(explicit) => {
                let explicit = start_dir.join(explicit);
                if !explicit.is_file() {
                    return Err(ConfigError::NotFound {
                        path: explicit.display().to_string(),
                    }
                    .into());
                }
                Some(explicit)
            }
            None => Self::discover_config_file_from(start_dir),
        };

        let project_root = match &config_path {
            Some(path) => project_root_for(path),
            None => start_dir.to_path_buf(),
        };
        debug!(
            config_path = ?config_path,
            project_root = %project_root.display(),
            "Resolved configuration location"
        );

        // Built-in defaults, with paths anchored at the project root
        let mut content = ContentConfig::default();
        content.root = Some(project_root.join(super::DEFAULT_CONTENT_ROOT));
        let mut versions = VersionsConfig::default();
        versions.manifest = Some(project_root.join(super::DEFAULT_MANIFEST));
        let mut checks = ChecksConfig::default();

        for key in [
            "content_root",
            "source_locale",
            "doc_dir",
            "min_versions",
            "manifest",
            "manifest_key",
            "extension",
            "extension_policy",
            "ignore",
            "verbose",
        ] {
            source_attribution.insert(key.to_string(), ConfigSource::Default);
        }

        if let Some(path) = &config_path {
            let file_config = Self::load_config_file(path)?;
            let from_file = ConfigSource::Config;

            if let Some(file_content) = file_config.content {
                if let Some(root) = file_content.root {
                    content.root = Some(project_root.join(root));
                    source_attribution.insert("content_root".to_string(), from_file.clone());
                }
                if file_content.source_locale.is_some() {
                    content.source_locale = file_content.source_locale;
                    source_attribution.insert("source_locale".to_string(), from_file.clone());
                }
                if file_content.doc_dir.is_some() {
                    content.doc_dir = file_content.doc_dir;
                    source_attribution.insert("doc_dir".to_string(), from_file.clone());
                }
                if file_content.min_versions.is_some() {
                    content.min_versions = file_content.min_versions;
                    source_attribution.insert("min_versions".to_string(), from_file.clone());
                }
            }

            if let Some(file_versions) = file_config.versions {
                if file_versions.supported.is_some() {
                    versions.supported = file_versions.supported;
                    source_attribution
                        .insert("supported_versions".to_string(), from_file.clone());
                }
                if let Some(manifest) = file_versions.manifest {
                    versions.manifest = Some(project_root.join(manifest));
                    source_attribution.insert("manifest".to_string(), from_file.clone());
                }
                if file_versions.manifest_key.is_some() {
                    versions.manifest_key = file_versions.manifest_key;
                    source_attribution.insert("manifest_key".to_string(), from_file.clone());
                }
            }

            if let Some(file_checks) = file_config.checks {
                if file_checks.extension.is_some() {
                    checks.extension = file_checks.extension;
                    source_attribution.insert("extension".to_string(), from_file.clone());
                }
                if file_checks.extension_policy.is_some() {
                    checks.extension_policy = file_checks.extension_policy;
                    source_attribution.insert("extension_policy".to_string(), from_file.clone());
                }
                if !file_checks.ignore.is_empty() {
                    checks.ignore = file_checks.ignore;
                    source_attribution.insert("ignore".to_string(), from_file.clone());
                }
            }
        }

        // CLI overrides, with paths anchored at the working directory
        if let Some(root) = &cli_args.content_root {
            content.root = Some(start_dir.join(root));
            source_attribution.insert("content_root".to_string(), ConfigSource::Cli);
        }
        if !cli_args.supported_versions.is_empty() {
            versions.supported = Some(cli_args.supported_versions.clone());
            source_attribution.insert("supported_versions".to_string(), ConfigSource::Cli);
        }
        if let Some(manifest) = &cli_args.manifest {
            versions.manifest = Some(start_dir.join(manifest));
            source_attribution.insert("manifest".to_string(), ConfigSource::Cli);
        }
        if let Some(key) = &cli_args.manifest_key {
            versions.manifest_key = Some(key.clone());
            source_attribution.insert("manifest_key".to_string(), ConfigSource::Cli);
        }
        if let Some(locale) = &cli_args.source_locale {
            content.source_locale = Some(locale.clone());
            source_attribution.insert("source_locale".to_string(), ConfigSource::Cli);
        }
        if let Some(doc_dir) = &cli_args.doc_dir {
            content.doc_dir = Some(doc_dir.clone());
            source_attribution.insert("doc_dir".to_string(), ConfigSource::Cli);
        }
        if let Some(policy) = &cli_args.extension_policy {
            let parsed = policy.parse::<ExtensionPolicy>().map_err(|reason| {
                ConfigError::InvalidValue {
                    key: "extension_policy".to_string(),
                    value: reason,
                }
            })?;
            checks.extension_policy = Some(parsed);
            source_attribution.insert("extension_policy".to_string(), ConfigSource::Cli);
        }
        let verbose = match cli_args.verbose {
            Some(verbose) => {
                source_attribution.insert("verbose".to_string(), ConfigSource::Cli);
                verbose
            }
            None => false,
        };

        let config = Self {
            content,
            versions,
            checks,
            project_root,
            config_path,
            verbose,
            source_attribution,
        };

        config.validate()?;

        Ok(config)
    }

    /// Discover config file by searching upward from a given directory
    ///
    /// Walks up the directory tree looking for `.doccheck/config.toml`,
    /// stopping at repository root markers (.git, .hg, .svn) or the
    /// filesystem root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = Some(start_dir);

        while let Some(dir) = current_dir {
            let config_path = dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            if dir.join(".git").exists() || dir.join(".hg").exists() || dir.join(".svn").exists()
            {
                break;
            }

            current_dir = dir.parent();
        }

        None
    }

    /// Load configuration from TOML file
    fn load_config_file(path: &Path) -> Result<TomlConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                ConfigError::DiscoveryFailed {
                    reason: format!("cannot read {}: {e}", path.display()),
                }
            }
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {e}", path.display())))
    }
}

/// Project root for a config file: the parent of `.doccheck/` when the file
/// lives there, otherwise the file's own directory.
fn project_root_for(config_path: &Path) -> PathBuf {
    let parent = config_path.parent().unwrap_or_else(|| Path::new("."));
    if parent.file_name().is_some_and(|name| name == CONFIG_DIR_NAME) {
        parent.parent().unwrap_or(parent).to_path_buf()
    } else {
        parent.to_path_buf()
    }
}
