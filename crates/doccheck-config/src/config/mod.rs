//! Configuration management for doccheck
//!
//! This module provides hierarchical configuration with discovery and precedence:
//! CLI > file > defaults. Supports TOML configuration files with `[content]`,
//! `[versions]`, and `[checks]` sections.

mod builder;
mod cli_args;
mod discovery;
mod manifest;
mod model;
mod sources;
mod validation;

pub use builder::ConfigBuilder;
pub use cli_args::CliArgs;
pub use discovery::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use model::*;
pub use doccheck_utils::types::ConfigSource;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, DocCheckError};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_config(root: &Path, content: &str) -> PathBuf {
        let dir = root.join(CONFIG_DIR_NAME);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_config_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();

        let config = Config::discover_from(temp.path(), &CliArgs::default()).unwrap();

        assert!(config.config_path.is_none());
        assert_eq!(config.project_root, temp.path());
        assert_eq!(config.content_root(), temp.path().join("content"));
        assert_eq!(config.source_locale(), "en-US");
        assert_eq!(config.doc_dir(), "doc");
        assert_eq!(config.min_versions(), 2);
        assert_eq!(config.extension(), "md");
        assert_eq!(config.extension_policy(), ExtensionPolicy::Enforce);
        assert_eq!(
            config.source_attribution.get("content_root"),
            Some(&ConfigSource::Default)
        );
    }

    #[test]
    fn test_config_file_discovered_upward() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let config_path = write_config(
            temp.path(),
            r#"
[content]
root = "site/content"
min_versions = 3

[versions]
supported = ["3.4", "3.5"]

[checks]
extension_policy = "warn"
ignore = ["**/*.png"]
"#,
        );
        let nested = temp.path().join("site").join("tools");
        fs::create_dir_all(&nested).unwrap();

        let config = Config::discover_from(&nested, &CliArgs::default()).unwrap();

        assert_eq!(config.config_path.as_deref(), Some(config_path.as_path()));
        assert_eq!(config.project_root, temp.path());
        // File paths resolve against the project root, not the working directory
        assert_eq!(config.content_root(), temp.path().join("site/content"));
        assert_eq!(config.min_versions(), 3);
        assert_eq!(config.extension_policy(), ExtensionPolicy::Warn);
        assert_eq!(config.checks.ignore, vec!["**/*.png".to_string()]);
        assert_eq!(
            config.supported_versions().unwrap(),
            vec!["3.4".to_string(), "3.5".to_string()]
        );
        assert_eq!(
            config.source_attribution.get("content_root"),
            Some(&ConfigSource::Config)
        );
    }

    #[test]
    fn test_discovery_stops_at_repository_root() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), "[content]\nroot = \"outer\"\n");
        let repo = temp.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();

        assert!(Config::discover_config_file_from(&repo).is_none());

        let config = Config::discover_from(&repo, &CliArgs::default()).unwrap();
        assert!(config.config_path.is_none());
        assert_eq!(config.content_root(), repo.join("content"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        write_config(
            temp.path(),
            r#"
[content]
root = "content"
source_locale = "en-GB"

[versions]
supported = ["1.0", "1.1"]
"#,
        );

        let cli = CliArgs {
            content_root: Some(PathBuf::from("other")),
            supported_versions: vec!["2.0".to_string(), "2.1".to_string()],
            source_locale: Some("en-US".to_string()),
            extension_policy: Some("warn".to_string()),
            ..CliArgs::default()
        };
        let config = Config::discover_from(temp.path(), &cli).unwrap();

        assert_eq!(config.content_root(), temp.path().join("other"));
        assert_eq!(config.source_locale(), "en-US");
        assert_eq!(config.extension_policy(), ExtensionPolicy::Warn);
        assert_eq!(
            config.supported_versions().unwrap(),
            vec!["2.0".to_string(), "2.1".to_string()]
        );
        for key in ["content_root", "source_locale", "supported_versions", "extension_policy"] {
            assert_eq!(
                config.source_attribution.get(key),
                Some(&ConfigSource::Cli),
                "{key} should come from the CLI"
            );
        }
    }

    #[test]
    fn test_explicit_config_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ci.toml");
        fs::write(&path, "[content]\ndoc_dir = \"docs\"\n").unwrap();

        let cli = CliArgs {
            config_path: Some(path.clone()),
            ..CliArgs::default()
        };
        let config = Config::discover_from(temp.path(), &cli).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.doc_dir(), "docs");
    }

    #[test]
    fn test_explicit_config_path_missing() {
        let temp = TempDir::new().unwrap();
        let cli = CliArgs {
            config_path: Some(PathBuf::from("missing.toml")),
            ..CliArgs::default()
        };

        let err = Config::discover_from(temp.path(), &cli).unwrap_err();
        assert!(matches!(
            err,
            DocCheckError::Config(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        write_config(temp.path(), "[content\nroot = ");

        let err = Config::discover_from(temp.path(), &CliArgs::default()).unwrap_err();
        assert!(matches!(
            err,
            DocCheckError::Config(ConfigError::InvalidFile(_))
        ));
    }

    #[test]
    fn test_unknown_extension_policy_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        let cli = CliArgs {
            extension_policy: Some("strict".to_string()),
            ..CliArgs::default()
        };

        let err = Config::discover_from(temp.path(), &cli).unwrap_err();
        assert!(matches!(
            err,
            DocCheckError::Config(ConfigError::InvalidValue { ref key, .. }) if key == "extension_policy"
        ));
    }

    #[test]
    fn test_invalid_locale_in_file_rejected() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".git")).unwrap();
        write_config(temp.path(), "[content]\nsource_locale = \"en_US\"\n");

        let err = Config::discover_from(temp.path(), &CliArgs::default()).unwrap_err();
        assert_eq!(err.to_exit_code().as_i32(), 2);
    }
}
