use anyhow::Result;
use colored::Colorize;
use log::debug;
use serde::Serialize;
use std::io::{self, Write};

use crate::{
    config::OutputFormat,
    types::{CheckResult, Finding},
};

pub const NO_FINDINGS_MESSAGE: &str = "No likely-unused imports found.";

pub const HEURISTIC_NOTE: &str =
    "Note: This is a heuristic (simple-name occurrences). Please verify before removing.";

#[derive(Serialize)]
struct JsonReport<'a> {
    findings: &'a [Finding],
    files_analyzed: usize,
    note: &'a str,
}

pub fn format_finding(finding: &Finding) -> String {
    format!(
        "{} -> {} (occurrences={})",
        finding.file_path, finding.import_text, finding.occurrence_count
    )
}

/// Writes the plain-text report: one line per finding (or the no-findings
/// message), a blank line, then the heuristic note.
pub fn print_findings<W: Write>(writer: &mut W, findings: &[Finding]) -> io::Result<()> {
    debug!("Printing {} findings", findings.len());
    if findings.is_empty() {
        writeln!(writer, "{}", NO_FINDINGS_MESSAGE)?;
    } else {
        for finding in findings {
            writeln!(writer, "{}", format_finding(finding))?;
        }
    }

    writeln!(writer, "\n{}", HEURISTIC_NOTE)?;
    writer.flush()?;
    Ok(())
}

fn print_findings_json<W: Write>(writer: &mut W, result: &CheckResult) -> Result<()> {
    let report = JsonReport {
        findings: &result.findings,
        files_analyzed: result.files_analyzed,
        note: HEURISTIC_NOTE,
    };
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn print_report<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => print_findings(writer, &result.findings)?,
        OutputFormat::Json => print_findings_json(writer, result)?,
    }
    Ok(())
}

/// One-line run summary, meant for stderr so the report on stdout stays exact.
pub fn print_summary<W: Write>(
    writer: &mut W,
    result: &CheckResult,
    elapsed_ms: u128,
    num_threads: usize,
) -> io::Result<()> {
    let marker = if result.findings.is_empty() { "✓".green().bold() } else { "⚠".yellow().bold() };
    writeln!(
        writer,
        "{} {} likely-unused imports. Finished in {}ms on {} files (using {} threads).",
        marker,
        result.findings.len().to_string().yellow(),
        elapsed_ms.to_string().cyan(),
        result.files_analyzed.to_string().cyan(),
        num_threads.to_string().cyan()
    )?;
    writer.flush()?;
    Ok(())
}
