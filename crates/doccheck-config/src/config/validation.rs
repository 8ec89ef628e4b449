use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

use crate::error::{ConfigError, DocCheckError};

use super::Config;

/// Language subtag followed by any number of region/script/variant subtags
static LOCALE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("Invalid locale pattern")
});

fn invalid(key: &str, value: impl Into<String>) -> DocCheckError {
    DocCheckError::Config(ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.into(),
    })
}

/// True when `name` is usable as a single path component.
pub(crate) fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

impl Config {
    /// Validate configuration values
    pub(crate) fn validate(&self) -> Result<(), DocCheckError> {
        let locale = self.source_locale();
        if !LOCALE_PATTERN.is_match(locale) {
            return Err(invalid(
                "source_locale",
                format!("'{locale}' is not a locale identifier"),
            ));
        }

        let doc_dir = self.doc_dir();
        if !is_single_component(doc_dir) {
            return Err(invalid(
                "doc_dir",
                format!("'{doc_dir}' must be a single directory name"),
            ));
        }

        if self.min_versions() == 0 {
            return Err(invalid("min_versions", "must be greater than 0"));
        }

        let extension = self.extension();
        if extension.is_empty() {
            return Err(invalid("extension", "must not be empty"));
        }
        if extension.contains(['.', '/', '\\']) {
            return Err(invalid(
                "extension",
                format!("'{extension}' must be given without a dot, e.g. 'md'"),
            ));
        }

        if self.manifest_key().is_empty() {
            return Err(invalid("manifest_key", "must not be empty"));
        }

        self.ignore_globset()?;

        Ok(())
    }
}
