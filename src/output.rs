// src/output.rs
use std::io::Write;

use serde::Serialize;

use crate::args::OutputFormat;
use crate::document::Document;
use crate::stats::DocStats;

/// Emit the analysis to the configured output format.
pub fn emit(stats: &DocStats, doc: &Document, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => output_text(stats, doc, out)?,
        OutputFormat::Json => output_json(stats, doc, out)?,
    }
    Ok(())
}

/// The condensed notification block: file metadata plus every statistic.
pub fn format_summary(stats: &DocStats, doc: &Document) -> String {
    let ext = if doc.ext.is_empty() { "none" } else { &doc.ext };
    format!(
        "Analysis of {name}\n\
         Extension: {ext}\n\
         Language: {lang}\n\
         Total lines: {total}\n\
         Empty lines: {empty}\n\
         Code lines: {code}\n\
         Words: {words}\n\
         Chars: {chars} (without spaces: {no_space})\n\
         {selection}",
        name = doc.name,
        lang = doc.language_id,
        total = stats.total_lines,
        empty = stats.empty_lines,
        code = stats.code_lines,
        words = stats.words,
        chars = stats.chars,
        no_space = stats.chars_no_space,
        selection = selection_line(stats),
    )
}

/// The bordered detail report, one line per entry.
pub fn format_detail(stats: &DocStats, doc: &Document) -> Vec<String> {
    vec![
        "=== FILE ANALYSIS REPORT ===".to_string(),
        format!("File: {}", doc.name),
        format!("Path: {}", doc.path),
        format!("Language: {}", doc.language_id),
        format!("Lines: {} (empty: {})", stats.total_lines, stats.empty_lines),
        format!("Words: {}", stats.words),
        format!(
            "Chars: {} (without spaces: {})",
            stats.chars, stats.chars_no_space
        ),
        format!("Size: {:.2} KB", stats.chars as f64 / 1024.0),
        selection_line(stats),
        "============================".to_string(),
    ]
}

fn selection_line(stats: &DocStats) -> String {
    match &stats.selection {
        Some(sel) => format!(
            "Selected: {} lines, {} words, {} chars",
            sel.lines, sel.words, sel.chars
        ),
        None => "No selection".to_string(),
    }
}

fn output_text(stats: &DocStats, doc: &Document, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", format_summary(stats, doc))?;
    writeln!(out)?;
    for line in format_detail(stats, doc) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: &'a str,
    path: &'a str,
    language: &'a str,
    extension: &'a str,
    stats: &'a DocStats,
}

fn output_json(stats: &DocStats, doc: &Document, out: &mut impl Write) -> anyhow::Result<()> {
    let report = JsonReport {
        file: &doc.name,
        path: &doc.path,
        language: &doc.language_id,
        extension: &doc.ext,
        stats,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
