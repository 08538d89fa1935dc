//! Audit log and report writers.
//!
//! Both outputs are flat files under the output directory: a JSON log with
//! the full per-clause verdicts, and a Markdown report with the findings a
//! reviewer reads first.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_OUTPUT_DIR;
use crate::error::Result;
use crate::risk::checklist;
use crate::types::{ContractAudit, RiskLabel};

use super::text::{clean_text, wrap_text};

/// Timestamp format used in output file names.
const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Resolve the output directory, creating it if needed.
fn ensure_output_dir(output: Option<&Path>) -> Result<PathBuf> {
    let dir = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Write content atomically: temp file, sync, rename.
///
/// Partial writes must not corrupt an existing log on crash.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let temp = path.with_extension("tmp");
    {
        let mut file = File::create(&temp)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp, path)?;
    Ok(())
}

/// Save the full audit as a timestamped JSON log.
///
/// # Returns
/// Path to the saved file, `<dir>/log_YYYYMMDD_HHMMSS.json`.
pub fn save_audit_log(audit: &ContractAudit, output: Option<&Path>) -> Result<PathBuf> {
    let dir = ensure_output_dir(output)?;
    let stamp = audit.timestamp.format(FILE_STAMP_FORMAT);
    let path = dir.join(format!("log_{stamp}.json"));

    let content = serde_json::to_string_pretty(audit)?;
    write_atomic(&path, &content)?;

    Ok(path)
}

/// Render the audit as a Markdown report.
///
/// Mirrors the reviewer-facing layout: title, overall score, executive
/// summary, key-clause checklist, then findings for Medium/High clauses
/// with explanation, statutory reference and suggested rewrite.
#[must_use]
pub fn render_markdown(audit: &ContractAudit) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Legal Risk Audit: {}\n\n",
        clean_text(&audit.document_type)
    ));
    out.push_str(&format!(
        "**Overall risk score: {}/100 ({})**\n\n",
        audit.risk_score,
        RiskLabel::from_score(audit.risk_score).as_str()
    ));
    out.push_str(&format!(
        "Audited: {}\n\n",
        audit.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    if !audit.entities.parties.is_empty()
        || !audit.entities.financials.is_empty()
        || !audit.entities.jurisdiction.is_empty()
    {
        out.push_str("## Document Facts\n\n");
        push_fact(&mut out, "Parties", &audit.entities.parties);
        push_fact(&mut out, "Financials", &audit.entities.financials);
        push_fact(&mut out, "Jurisdiction", &audit.entities.jurisdiction);
        push_fact(&mut out, "Dates", &audit.entities.dates);
        out.push('\n');
    }

    out.push_str("## Executive Summary\n\n");
    if audit.summary.trim().is_empty() {
        out.push_str("Not available.\n\n");
    } else {
        out.push_str(&wrap_text(&clean_text(&audit.summary)));
        out.push_str("\n\n");
    }

    out.push_str("## Key Clause Checklist\n\n");
    for entry in checklist(&audit.detailed_analysis) {
        let mark = if entry.present { "x" } else { " " };
        out.push_str(&format!("- [{mark}] {}\n", entry.category));
    }
    out.push('\n');

    out.push_str("## Critical Risk Findings\n\n");
    let mut any_finding = false;
    for review in &audit.detailed_analysis {
        let label = review.analysis.label;
        if label == RiskLabel::Low {
            continue;
        }
        any_finding = true;

        out.push_str(&format!(
            "### [{}] {}\n\n",
            label.as_str().to_uppercase(),
            clean_text(review.display_title())
        ));
        out.push_str(&format!(
            "Risk: {}\n\n",
            wrap_text(&clean_text(&review.analysis.explanation))
        ));
        out.push_str(&format!(
            "Statutory ref: {}\n\n",
            clean_text(review.analysis.legal_reference.as_deref().unwrap_or("N/A"))
        ));
        out.push_str(&format!(
            "Advice: {}\n\n",
            wrap_text(&clean_text(&review.analysis.alternative_clause))
        ));
    }
    if !any_finding {
        out.push_str("No medium or high risk clauses were found.\n");
    }

    out
}

fn push_fact(out: &mut String, label: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let cleaned: Vec<String> = values.iter().map(|v| clean_text(v)).collect();
    out.push_str(&format!("- {label}: {}\n", cleaned.join(", ")));
}

/// Save the Markdown report next to the JSON log.
///
/// # Returns
/// Path to the saved file, `<dir>/report_YYYYMMDD_HHMMSS.md`.
pub fn save_markdown_report(audit: &ContractAudit, output: Option<&Path>) -> Result<PathBuf> {
    let dir = ensure_output_dir(output)?;
    let stamp = audit.timestamp.format(FILE_STAMP_FORMAT);
    let path = dir.join(format!("report_{stamp}.md"));

    write_atomic(&path, &render_markdown(audit))?;

    Ok(path)
}
