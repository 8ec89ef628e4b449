use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use tracing::debug;

use crate::error::ConfigError;

use super::Config;
use super::validation::is_single_component;

impl Config {
    /// Resolve the supported-version list.
    ///
    /// An inline list (`[versions].supported`, `--supported-version`, or the
    /// builder) wins; otherwise the list is read from the manifest key. The
    /// result keeps the declared order.
    ///
    /// # Errors
    ///
    /// Fails when no list can be found, when the manifest is unreadable or the
    /// key is not an array of strings, and when the list is empty, holds a
    /// name that is not a single directory name, or repeats an entry.
    pub fn supported_versions(&self) -> Result<Vec<String>, ConfigError> {
        let versions = match &self.versions.supported {
            Some(inline) => inline.clone(),
            None => self.read_manifest_versions()?,
        };

        validate_versions(&versions)?;
        debug!(count = versions.len(), "Resolved supported versions");
        Ok(versions)
    }

    fn read_manifest_versions(&self) -> Result<Vec<String>, ConfigError> {
        let Some(path) = self.manifest_path() else {
            return Err(ConfigError::MissingRequired(
                "versions.supported".to_string(),
            ));
        };
        let key = self.manifest_key();
        let manifest_error = |reason: String| ConfigError::Manifest {
            path: path.display().to_string(),
            reason,
        };

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Only an error when nobody asked for this manifest explicitly
                return Err(if self.versions_source_is_default() {
                    ConfigError::MissingRequired("versions.supported".to_string())
                } else {
                    manifest_error("file not found".to_string())
                });
            }
            Err(e) => return Err(manifest_error(e.to_string())),
        };

        let json: serde_json::Value =
            serde_json::from_str(&content).map_err(|e| manifest_error(format!("invalid JSON: {e}")))?;

        let array = json
            .get(key)
            .ok_or_else(|| manifest_error(format!("key '{key}' not found")))?
            .as_array()
            .ok_or_else(|| manifest_error(format!("key '{key}' is not an array")))?;

        array
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| manifest_error(format!("'{key}' entry {entry} is not a string")))
            })
            .collect()
    }

    fn versions_source_is_default(&self) -> bool {
        matches!(
            self.source_attribution.get("manifest"),
            None | Some(super::ConfigSource::Default)
        )
    }

    /// Compile the ignore globs into a matcher.
    ///
    /// Patterns are matched against file paths relative to each doc
    /// directory, using `/` as separator.
    pub fn ignore_globset(&self) -> Result<GlobSet, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.checks.ignore {
            let glob = Glob::new(pattern).map_err(|e| ConfigError::InvalidValue {
                key: "ignore".to_string(),
                value: format!("'{pattern}': {e}"),
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| ConfigError::InvalidValue {
            key: "ignore".to_string(),
            value: e.to_string(),
        })
    }
}

fn validate_versions(versions: &[String]) -> Result<(), ConfigError> {
    let invalid = |value: String| ConfigError::InvalidValue {
        key: "versions.supported".to_string(),
        value,
    };

    if versions.is_empty() {
        return Err(invalid("list is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for version in versions {
        if !is_single_component(version) {
            return Err(invalid(format!(
                "'{version}' is not a valid version directory name"
            )));
        }
        if !seen.insert(version.as_str()) {
            return Err(invalid(format!("duplicate entry '{version}'")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_inline_versions_win_over_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"supportedVersions": ["1.0"]}"#,
        )
        .unwrap();

        let config = Config::builder()
            .project_root(temp.path())
            .supported_versions(["3.4", "3.5"])
            .build()
            .unwrap();

        assert_eq!(config.supported_versions().unwrap(), strings(&["3.4", "3.5"]));
    }

    #[test]
    fn test_versions_from_manifest() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("package.json"),
            r#"{"name": "site", "supportedVersions": ["3.5", "3.4"]}"#,
        )
        .unwrap();

        let config = Config::builder().project_root(temp.path()).build().unwrap();

        // Declared order is preserved
        assert_eq!(config.supported_versions().unwrap(), strings(&["3.5", "3.4"]));
    }

    #[test]
    fn test_versions_from_custom_manifest_key() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("site.json"),
            r#"{"docs": {"nested": true}, "versions": ["2.0", "2.1"]}"#,
        )
        .unwrap();

        let config = Config::builder()
            .project_root(temp.path())
            .manifest("site.json")
            .manifest_key("versions")
            .build()
            .unwrap();

        assert_eq!(config.supported_versions().unwrap(), strings(&["2.0", "2.1"]));
    }

    #[test]
    fn test_missing_default_manifest_is_missing_required() {
        let temp = TempDir::new().unwrap();
        let config = Config::builder().project_root(temp.path()).build().unwrap();

        assert!(matches!(
            config.supported_versions(),
            Err(ConfigError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_missing_explicit_manifest_is_manifest_error() {
        let temp = TempDir::new().unwrap();
        let config = Config::builder()
            .project_root(temp.path())
            .manifest("nope.json")
            .build()
            .unwrap();

        assert!(matches!(
            config.supported_versions(),
            Err(ConfigError::Manifest { .. })
        ));
    }

    #[test]
    fn test_manifest_shape_errors() {
        let temp = TempDir::new().unwrap();
        let cases = [
            ("not json", "invalid JSON"),
            (r#"{"other": []}"#, "not found"),
            (r#"{"supportedVersions": "3.4"}"#, "not an array"),
            (r#"{"supportedVersions": ["3.4", 3.5]}"#, "not a string"),
        ];

        for (content, expected) in cases {
            std::fs::write(temp.path().join("package.json"), content).unwrap();
            let config = Config::builder().project_root(temp.path()).build().unwrap();
            match config.supported_versions() {
                Err(ConfigError::Manifest { reason, .. }) => {
                    assert!(reason.contains(expected), "{reason} should mention {expected}");
                }
                other => panic!("unexpected result for {content}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_duplicate_versions_rejected() {
        let config = Config::builder()
            .supported_versions(["3.4", "3.5", "3.4"])
            .build()
            .unwrap();

        match config.supported_versions() {
            Err(ConfigError::InvalidValue { key, value }) => {
                assert_eq!(key, "versions.supported");
                assert!(value.contains("duplicate entry '3.4'"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_and_path_like_versions_rejected() {
        let cases: [&[&str]; 5] = [&[], &[""], &["."], &[".."], &["3.4/en-US"]];
        for versions in cases {
            let config = Config::builder()
                .supported_versions(versions.iter().copied())
                .build()
                .unwrap();
            assert!(
                config.supported_versions().is_err(),
                "{versions:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_ignore_globset_matches_relative_paths() {
        let config = Config::builder()
            .add_ignore("**/*.png")
            .add_ignore("assets/**")
            .build()
            .unwrap();
        let set = config.ignore_globset().unwrap();

        assert!(set.is_match("img/diagram.png"));
        assert!(set.is_match("logo.png"));
        assert!(set.is_match("assets/site.css"));
        assert!(!set.is_match("intro.md"));
    }
}
