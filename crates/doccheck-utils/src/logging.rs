//! Logging and report rendering for doccheck
//!
//! Structured logging goes through `tracing` to stderr so that `--json`
//! output on stdout stays machine-readable. The human-readable report is
//! rendered here as well.

use std::io::IsTerminal;
use std::time::Duration;
use tracing::{Level, info, span};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::types::{CheckStatus, LayoutCheck, LayoutReport};

/// Maximum number of failed conditions listed under a check in the text report
const MAX_LISTED_CONDITIONS: usize = 20;

/// Check if colored output should be used.
///
/// Returns true only if stdout is a terminal and `NO_COLOR` is not set.
#[must_use]
pub fn use_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise verbose mode enables debug output
/// for doccheck crates and the default shows warnings only.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("doccheck=debug,doccheck_layout=debug,doccheck_config=debug,info")
            } else {
                EnvFilter::try_new("warn")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if verbose {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(false)
                    .with_file(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_line_number(false)
                    .with_file(false)
                    .compact(),
            )
            .try_init()?;
    }

    Ok(())
}

/// Create a span for one check with structured fields
pub fn check_span(check: &str, content_root: &str) -> tracing::Span {
    span!(
        Level::INFO,
        "layout_check",
        check = %check,
        content_root = %content_root,
    )
}

/// Log check completion with its status and duration
pub fn log_check_complete(check: &LayoutCheck, duration: Duration) {
    info!(
        check = %check.name,
        status = %check.status.as_str(),
        failed_conditions = check.failed_conditions().len(),
        duration_ms = %duration.as_millis(),
        "Layout check completed"
    );
}

/// Print the human-readable report to stdout
pub fn log_layout_report(report: &LayoutReport) {
    print!("{}", render_layout_report(report, use_color()));
}

/// Render the human-readable report
#[must_use]
pub fn render_layout_report(report: &LayoutReport, use_colors: bool) -> String {
    use crossterm::style::{Attribute, Color, Stylize};

    let style = |text: &str, color: Color, bold: bool| -> String {
        if use_colors {
            let mut styled = text.with(color);
            if bold {
                styled = styled.attribute(Attribute::Bold);
            }
            format!("{styled}")
        } else {
            text.to_string()
        }
    };

    let mut out = String::new();
    let rule = "─".repeat(40);

    out.push_str(&style("Documentation Layout Check", Color::Cyan, true));
    out.push('\n');
    out.push_str(&style(&format!("content root: {}", report.content_root), Color::DarkGrey, false));
    out.push('\n');
    out.push_str(&style(&rule, Color::Cyan, true));
    out.push_str("\n\n");

    for check in &report.checks {
        let (symbol, color, tag) = match check.status {
            CheckStatus::Pass => ("✓", Color::Green, None),
            CheckStatus::Warn => ("⚠", Color::Yellow, Some("[WARN]")),
            CheckStatus::Fail => ("✗", Color::Red, Some("[FAIL]")),
            CheckStatus::Skip => ("○", Color::DarkGrey, Some("[SKIP]")),
        };

        let name = to_title_case(&check.name);
        match tag {
            Some(tag) => out.push_str(&format!(
                "{} {} {}\n",
                style(symbol, color, true),
                style(&name, Color::Reset, true),
                style(tag, color, true)
            )),
            None => out.push_str(&format!(
                "{} {}\n",
                style(symbol, color, true),
                style(&name, Color::Reset, true)
            )),
        }
        out.push_str(&format!("  {}\n", check.details));

        let failed = check.failed_conditions();
        for condition in failed.iter().take(MAX_LISTED_CONDITIONS) {
            out.push_str(&format!("    - {}\n", condition.name));
            if let Some(expected) = &condition.expected {
                out.push_str(&format!("        expected: {expected}\n"));
            }
            if let Some(actual) = &condition.actual {
                out.push_str(&format!("        actual:   {actual}\n"));
            }
        }
        if failed.len() > MAX_LISTED_CONDITIONS {
            out.push_str(&format!(
                "    … and {} more\n",
                failed.len() - MAX_LISTED_CONDITIONS
            ));
        }
        out.push('\n');
    }

    out.push_str(&style(&rule, Color::DarkGrey, false));
    out.push('\n');

    let fail_count = report.count(CheckStatus::Fail);
    let warn_count = report.count(CheckStatus::Warn);
    let skip_count = report.count(CheckStatus::Skip);
    let pass_count = report.count(CheckStatus::Pass);

    let mut summary = vec![format!("{pass_count} passed")];
    if fail_count > 0 {
        summary.push(format!("{fail_count} failed"));
    }
    if warn_count > 0 {
        summary.push(format!("{warn_count} warning"));
    }
    if skip_count > 0 {
        summary.push(format!("{skip_count} skipped"));
    }

    let (overall, color) = if report.ok {
        ("✓ CONFORMS", Color::Green)
    } else {
        ("✗ LAYOUT VIOLATIONS", Color::Red)
    };
    out.push_str(&format!(
        "{} {}\n",
        style(overall, color, true),
        style(&format!("({})", summary.join(", ")), color, false)
    ));

    out
}

/// Format a snake_case check name as Title Case (e.g. `source_locale` -> `Source Locale`)
fn to_title_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut c = word.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
