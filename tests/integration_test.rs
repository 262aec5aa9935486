//! Basic integration tests for the `doc_stats` crate

use std::io::Write;

use doc_stats::analyze::{self, Span};
use doc_stats::document::Document;
use doc_stats::output;

/// Test the full load-analyze-format path on a real file
#[test]
fn analyze_document_from_disk() {
    let mut file = tempfile::Builder::new()
        .prefix("sample")
        .suffix(".rs")
        .tempfile()
        .unwrap();
    file.write_all(b"fn main() {}\n\n// done\n").unwrap();

    let doc = Document::from_path(file.path()).unwrap();
    assert_eq!(doc.ext, "rs");
    assert_eq!(doc.language_id, "rust");
    assert!(doc.name.ends_with(".rs"));

    let stats = analyze::analyze(&doc.text);
    assert_eq!(stats.total_lines, 4);
    assert_eq!(stats.empty_lines, 2);
    assert_eq!(stats.code_lines, 2);
    assert_eq!(stats.words, 5);
}

/// Test that reading a missing path surfaces a `DocumentRead` error
#[test]
fn missing_document_is_an_error() {
    let err = Document::from_path(std::path::Path::new("/nonexistent/doc.txt")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/doc.txt"));
}

/// Test that the summary and detail views agree with the record
#[test]
fn presentation_surfaces_selection() {
    let doc = Document {
        text: "hello world\n\nfoo".to_string(),
        name: "sample.txt".to_string(),
        path: "sample.txt".to_string(),
        ext: "txt".to_string(),
        language_id: "plaintext".to_string(),
    };
    let stats = analyze::analyze_with_selection(
        &doc.text,
        Some(Span { start_line: 1, start_char: 0, end_line: 2, end_char: 3 }),
    );

    let summary = output::format_summary(&stats, &doc);
    assert!(summary.contains("Selected: 2 lines, 1 words, 4 chars"));

    let detail = output::format_detail(&stats, &doc);
    assert!(detail.contains(&"Selected: 2 lines, 1 words, 4 chars".to_string()));
}

/// Test the serde round trip of the stats record
#[test]
fn stats_serde_round_trip() {
    let stats = analyze::analyze_with_selection(
        "a b c",
        Some(Span { start_line: 0, start_char: 0, end_line: 0, end_char: 3 }),
    );
    let json = serde_json::to_string(&stats).unwrap();
    let back: doc_stats::stats::DocStats = serde_json::from_str(&json).unwrap();
    assert_eq!(stats, back);
}
