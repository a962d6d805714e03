//! Output formatting for generation reports.

use crate::report::{BranchOutcome, GenerationReport};

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Yaml,
    Markdown,
}

/// Formats a generation report in the requested format.
pub fn format_report(report: &GenerationReport, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        ReportFormat::Yaml => {
            serde_yaml::to_string(report).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        ReportFormat::Markdown => Ok(report_to_markdown(report)),
    }
}

fn report_to_markdown(report: &GenerationReport) -> String {
    let mut out = String::new();

    out.push_str("# Type Generation Report\n\n");
    if let Some(ref output) = report.output {
        out.push_str(&format!("**Output:** `{}`\n\n", output.display()));
    }
    out.push_str(&format!("**Declarations:** {}\n\n", report.declaration_count));
    out.push_str(&format!("**Overrides loaded:** {}\n\n", report.override_count));
    out.push_str(&format!("**Warnings:** {}\n\n", report.warning_count()));

    if let Some(ref warning) = report.override_warning {
        out.push_str(&format!("> {warning}\n\n"));
    }

    if !report.fragments.is_empty() {
        out.push_str("## Fragments\n\n");
        out.push_str("| Name | Kind | Branches | Warnings |\n");
        out.push_str("|------|------|----------|----------|\n");
        for fragment in &report.fragments {
            let branches = fragment
                .branches
                .iter()
                .map(|branch| match branch.outcome {
                    BranchOutcome::Applied => branch.branch.to_string(),
                    BranchOutcome::Degraded { .. } => format!("{} (degraded)", branch.branch),
                    BranchOutcome::Failed { .. } => format!("{} (failed)", branch.branch),
                })
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "| `{}` | {} | {} | {} |\n",
                fragment.name,
                fragment.kind,
                branches,
                fragment.warning_count()
            ));
        }
        out.push('\n');
    }

    if !report.synthesized.is_empty() {
        out.push_str("## Synthesized From Overrides\n\n");
        for name in &report.synthesized {
            out.push_str(&format!("- `{name}`\n"));
        }
        out.push('\n');
    }

    let warnings = report.warnings();
    if !warnings.is_empty() {
        out.push_str("## Warnings\n\n");
        for warning in warnings {
            out.push_str(&format!("- {warning}\n"));
        }
        out.push('\n');
    }

    out
}
