//! Error reporting utilities for user-friendly error display
//!
//! Builds on [`DocCheckError::display_for_user`] and adds hints specific to
//! the command that was running.

use doccheck_utils::error::{ConfigError, DocCheckError};

pub mod utils {
    use super::*;

    /// Render `error` for stderr, with hints for the failing `operation`.
    #[must_use]
    pub fn create_contextual_report(error: &DocCheckError, operation: &str) -> String {
        let mut report = error.display_for_user();

        let hints = operation_hints(error, operation);
        if !hints.is_empty() {
            report.push_str(&format!("\nWhile running '{operation}':\n"));
            for hint in hints {
                report.push_str(&format!("  - {hint}\n"));
            }
        }

        report
    }

    fn operation_hints(error: &DocCheckError, operation: &str) -> Vec<&'static str> {
        match (operation, error) {
            (
                "check",
                DocCheckError::Config(ConfigError::MissingRequired(_) | ConfigError::Manifest { .. }),
            ) => vec![
                "Pass --supported-version once per version to skip the manifest",
                "Run `doccheck config` to see where the manifest is looked up",
            ],
            ("check", DocCheckError::Config(ConfigError::InvalidValue { key, .. }))
                if key == "versions.supported" =>
            {
                vec!["Each supported version must be listed exactly once"]
            }
            ("check", DocCheckError::Serialization { .. }) => vec![
                "The checks ran; only rendering the JSON report failed",
            ],
            ("config", DocCheckError::Config(_)) => vec![
                "Use --config <path> to load a specific configuration file",
                "Remove the offending key to fall back to its default",
            ],
            _ => Vec::new(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_report_includes_user_message_and_hints() {
            let err = DocCheckError::Config(ConfigError::MissingRequired(
                "versions.supported".to_string(),
            ));
            let report = create_contextual_report(&err, "check");

            assert!(report.starts_with("Error: "));
            assert!(report.contains("While running 'check':"));
            assert!(report.contains("--supported-version"));
        }

        #[test]
        fn test_duplicate_versions_hint() {
            let err = DocCheckError::Config(ConfigError::InvalidValue {
                key: "versions.supported".to_string(),
                value: "duplicate entry '3.4'".to_string(),
            });
            let report = create_contextual_report(&err, "check");

            assert!(report.contains("duplicate entry '3.4'"));
            assert!(report.contains("exactly once"));
        }

        #[test]
        fn test_serialization_hint_for_check() {
            let err = DocCheckError::Serialization {
                reason: "boom".to_string(),
            };
            let report = create_contextual_report(&err, "check");

            assert!(report.contains("Failed to render the report: boom"));
            assert!(report.contains("only rendering the JSON report failed"));
        }

        #[test]
        fn test_no_hints_for_unrelated_operation() {
            let err = DocCheckError::Serialization {
                reason: "boom".to_string(),
            };
            let report = create_contextual_report(&err, "config");

            assert!(!report.contains("While running"));
        }
    }
}
