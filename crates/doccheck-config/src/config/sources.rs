use std::collections::BTreeMap;

use super::{Config, ConfigSource};

fn source_label(source: Option<&ConfigSource>) -> String {
    source.unwrap_or(&ConfigSource::Default).as_str().to_string()
}

impl Config {
    /// Get effective configuration as key-value pairs with source attribution
    ///
    /// Keys are sorted so text and JSON output are stable.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let mut config = BTreeMap::new();

        let mut add_config = |key: &str, value: String| {
            let source = source_label(self.source_attribution.get(key));
            config.insert(key.to_string(), (value, source));
        };

        add_config("content_root", self.content_root().display().to_string());
        add_config("source_locale", self.source_locale().to_string());
        add_config("doc_dir", self.doc_dir().to_string());
        add_config("min_versions", self.min_versions().to_string());
        add_config("extension", self.extension().to_string());
        add_config("extension_policy", self.extension_policy().to_string());
        add_config("ignore", self.checks.ignore.join(", "));
        add_config("verbose", self.verbose.to_string());

        match &self.versions.supported {
            Some(inline) => add_config("supported_versions", inline.join(", ")),
            None => {
                if let Some(manifest) = self.manifest_path() {
                    add_config("manifest", manifest.display().to_string());
                }
                add_config("manifest_key", self.manifest_key().to_string());
            }
        }

        config
    }
}
