use std::path::PathBuf;

/// Configuration overrides collected from the command line.
///
/// Every field is optional; unset fields fall through to the config file and
/// then to built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub content_root: Option<PathBuf>,
    pub supported_versions: Vec<String>,
    pub manifest: Option<PathBuf>,
    pub manifest_key: Option<String>,
    pub source_locale: Option<String>,
    pub doc_dir: Option<String>,
    pub extension_policy: Option<String>,
    pub verbose: Option<bool>,
}
