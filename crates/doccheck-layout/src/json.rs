//! JSON emission for layout reports

use anyhow::Context;
use doccheck_utils::canonicalization::emit_jcs;
use doccheck_utils::types::LayoutReport;

/// Emit a layout report as canonical JSON using JCS (RFC 8785)
///
/// Keys are sorted and whitespace is fixed, so two runs over the same tree
/// differ only in `emitted_at`.
pub fn emit_report_json(report: &LayoutReport) -> anyhow::Result<String> {
    emit_jcs(report).context("Failed to emit layout report JSON")
}
