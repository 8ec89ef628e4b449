use doccheck_utils::error::LayoutError;
use doccheck_utils::types::{CheckStatus, LayoutCheck, LayoutCondition};

use super::{SOURCE_LOCALE, format_list};
use crate::listing::list_dirs;
use crate::options::LayoutOptions;

/// Every version directory contains the source locale directory.
///
/// All versions are evaluated; the check does not stop at the first
/// version missing its source.
pub fn check(options: &LayoutOptions) -> Result<LayoutCheck, LayoutError> {
    let locale = options.source_locale.as_str();
    let versions = list_dirs(&options.content_root)?;

    let mut conditions = Vec::with_capacity(versions.len());
    let mut missing = Vec::new();
    for version in &versions {
        let languages = list_dirs(&options.content_root.join(version))?;
        let passed = languages.iter().any(|l| l == locale);
        if !passed {
            missing.push(version.as_str());
        }
        conditions.push(
            LayoutCondition::new(version.as_str(), passed)
                .with_actual(format_list(&languages))
                .with_expected(format!("contains {locale}")),
        );
    }

    let (status, details) = if missing.is_empty() {
        (
            CheckStatus::Pass,
            format!("{locale} present in all {} versions", versions.len()),
        )
    } else {
        (
            CheckStatus::Fail,
            format!("{locale} missing from: {}", missing.join(", ")),
        )
    };

    Ok(LayoutCheck {
        name: SOURCE_LOCALE.to_string(),
        status,
        details,
        conditions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use doccheck_utils::test_support::{ContentTree, scenario_tree, scenario_versions};

    #[test]
    fn test_source_present_everywhere() {
        let tree = scenario_tree();
        let check = check(&LayoutOptions::new(tree.root(), scenario_versions())).unwrap();

        assert_eq!(check.status, CheckStatus::Pass);
        assert_eq!(check.conditions.len(), 2);
        assert_eq!(
            check.conditions[1].actual.as_deref(),
            Some("[en-US, es-ES]")
        );
    }

    #[test]
    fn test_every_missing_version_reported() {
        let tree = ContentTree::new()
            .doc("3.3", "es-ES", "intro.md")
            .doc("3.4", "en-US", "intro.md")
            .doc("3.5", "fr-FR", "intro.md");
        let check = check(&LayoutOptions::new(tree.root(), ["3.3", "3.4", "3.5"])).unwrap();

        assert_eq!(check.status, CheckStatus::Fail);
        assert_eq!(check.details, "en-US missing from: 3.3, 3.5");
        let failed: Vec<&str> = check
            .failed_conditions()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(failed, vec!["3.3", "3.5"]);
    }

    #[test]
    fn test_match_is_case_sensitive_and_exact() {
        let tree = ContentTree::new()
            .doc("3.4", "en-us", "intro.md")
            .doc("3.5", "en", "intro.md");
        let check = check(&LayoutOptions::new(tree.root(), ["3.4", "3.5"])).unwrap();

        assert_eq!(check.status, CheckStatus::Fail);
        assert_eq!(check.failed_conditions().len(), 2);
    }

    #[test]
    fn test_locale_file_does_not_count() {
        let tree = ContentTree::new()
            .doc("3.4", "es-ES", "intro.md")
            .file("3.4/en-US", "a file, not a directory");
        let check = check(&LayoutOptions::new(tree.root(), ["3.4"])).unwrap();

        assert_eq!(check.status, CheckStatus::Fail);
    }

    #[test]
    fn test_configured_source_locale() {
        let tree = ContentTree::new()
            .doc("1.0", "de-DE", "intro.md")
            .doc("1.1", "de-DE", "intro.md");
        let options =
            LayoutOptions::new(tree.root(), ["1.0", "1.1"]).with_source_locale("de-DE");

        assert_eq!(check(&options).unwrap().status, CheckStatus::Pass);
    }
}
