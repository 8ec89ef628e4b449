use doccheck_utils::error::LayoutError;
use doccheck_utils::types::{CheckStatus, LayoutCheck, LayoutCondition};

use super::{SUPPORTED_VERSIONS, format_list};
use crate::listing::list_dirs;
use crate::options::LayoutOptions;

/// Version directories under the content root equal the supported list.
///
/// Both sides are sorted by byte order and compared element by element, so
/// a missing version and a stray directory both fail the check.
pub fn check(options: &LayoutOptions) -> Result<LayoutCheck, LayoutError> {
    let observed = list_dirs(&options.content_root)?;
    let mut expected = options.supported_versions.clone();
    expected.sort();

    let passed = observed == expected;
    let condition = LayoutCondition::new("versions", passed)
        .with_actual(format_list(&observed))
        .with_expected(format_list(&expected));

    let details = if passed {
        format!(
            "{} version directories match the supported list",
            observed.len()
        )
    } else {
        let missing: Vec<&str> = expected
            .iter()
            .filter(|v| !observed.contains(*v))
            .map(String::as_str)
            .collect();
        let unexpected: Vec<&str> = observed
            .iter()
            .filter(|v| !expected.contains(*v))
            .map(String::as_str)
            .collect();

        let mut parts = Vec::new();
        if !missing.is_empty() {
            parts.push(format!("missing: {}", missing.join(", ")));
        }
        if !unexpected.is_empty() {
            parts.push(format!("unexpected: {}", unexpected.join(", ")));
        }
        format!("Version directories differ from the supported list ({})", parts.join("; "))
    };

    Ok(LayoutCheck {
        name: SUPPORTED_VERSIONS.to_string(),
        status: if passed { CheckStatus::Pass } else { CheckStatus::Fail },
        details,
        conditions: vec![condition],
    })
}
