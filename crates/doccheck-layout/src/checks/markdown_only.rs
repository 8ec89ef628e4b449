use camino::Utf8PathBuf;
use tracing::debug;

use doccheck_config::ExtensionPolicy;
use doccheck_utils::error::LayoutError;
use doccheck_utils::types::{CheckStatus, LayoutCheck, LayoutCondition};

use super::{MARKDOWN_ONLY, format_list, summarize};
use crate::listing::{list_dirs, walk_files};
use crate::options::LayoutOptions;

/// Shape of the tree plus the extension rule.
///
/// Conditions, in order:
/// - `version_count`: at least `min_versions` version directories
/// - `languages:<v>`: version `v` has at least one language directory
/// - `doc_files:<v>/<l>`: the doc directory of `v/l` holds at least one file
/// - `extension:<v>/<l>`: every non-ignored file there ends with `.<extension>`
///
/// Only extension conditions are subject to `extension_policy`; the others
/// always fail the check.
pub fn check(options: &LayoutOptions) -> Result<LayoutCheck, LayoutError> {
    let suffix = format!(".{}", options.extension);
    let versions = list_dirs(&options.content_root)?;

    let mut conditions = Vec::new();
    let mut structural_failures = Vec::new();
    let mut offending_files = 0usize;
    let mut total_files = 0usize;

    let enough_versions = versions.len() >= options.min_versions;
    if !enough_versions {
        structural_failures.push("version_count".to_string());
    }
    conditions.push(
        LayoutCondition::new("version_count", enough_versions)
            .with_actual(versions.len().to_string())
            .with_expected(format!(">= {}", options.min_versions)),
    );

    for version in &versions {
        let version_dir = options.content_root.join(version);
        let languages = list_dirs(&version_dir)?;

        let name = format!("languages:{version}");
        if languages.is_empty() {
            structural_failures.push(name.clone());
        }
        conditions.push(
            LayoutCondition::new(name, !languages.is_empty())
                .with_actual(format_list(&languages))
                .with_expected("at least 1 language"),
        );

        for language in &languages {
            let doc_dir = version_dir.join(language).join(&options.doc_dir);
            let pair = format!("{version}/{language}");

            let files = match walk_files(&doc_dir) {
                Ok(files) => files,
                Err(e) if e.is_not_found() => {
                    let name = format!("doc_files:{pair}");
                    structural_failures.push(name.clone());
                    conditions.push(
                        LayoutCondition::new(name, false)
                            .with_actual("missing")
                            .with_expected(format!("{} directory with at least 1 file", options.doc_dir)),
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            debug!(pair = %pair, files = files.len(), "Enumerated documentation files");
            total_files += files.len();

            let name = format!("doc_files:{pair}");
            if files.is_empty() {
                structural_failures.push(name.clone());
            }
            conditions.push(
                LayoutCondition::new(name, !files.is_empty())
                    .with_actual(format!("{} files", files.len()))
                    .with_expected("at least 1 file"),
            );

            let offenders: Vec<&Utf8PathBuf> = files
                .iter()
                .filter(|f| !options.ignore.is_match(f.as_str()))
                .filter(|f| !f.as_str().ends_with(&suffix))
                .collect();
            offending_files += offenders.len();
            let listed: Vec<&str> = offenders.iter().map(|f| f.as_str()).collect();
            conditions.push(
                LayoutCondition::new(format!("extension:{pair}"), offenders.is_empty())
                    .with_actual(if listed.is_empty() {
                        "none".to_string()
                    } else {
                        summarize(&listed)
                    })
                    .with_expected(format!("only *{suffix}")),
            );
        }
    }

    let (status, details) = if !structural_failures.is_empty() {
        (
            CheckStatus::Fail,
            format!("Layout incomplete: {}", summarize(&structural_failures)),
        )
    } else if offending_files > 0 {
        let message = format!("{offending_files} files without the {suffix} extension");
        match options.extension_policy {
            ExtensionPolicy::Enforce => (CheckStatus::Fail, message),
            ExtensionPolicy::Warn => (
                CheckStatus::Warn,
                format!("{message} (extension_policy = warn)"),
            ),
        }
    } else {
        (
            CheckStatus::Pass,
            format!(
                "{} versions, {total_files} documentation files, all {suffix}",
                versions.len()
            ),
        )
    };

    Ok(LayoutCheck {
        name: MARKDOWN_ONLY.to_string(),
        status,
        details,
        conditions,
    })
}
