// src/analyze.rs
//! Pure document analysis. Every function here is a stateless pass over a
//! text snapshot; nothing is retained between calls and nothing can fail.

use crate::stats::{DocStats, SelectionStats};

/// A selection span in zero-based (line, char) coordinates, end exclusive.
/// Char offsets count Unicode scalar values, same as the char statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub start_char: usize,
    pub end_line: usize,
    pub end_char: usize,
}

/// Analyze a whole document with no selection.
pub fn analyze(text: &str) -> DocStats {
    analyze_with_selection(text, None)
}

/// Analyze a whole document plus an optional selection span.
///
/// Lines are defined by `split('\n')`, so an empty document is a single
/// empty line and a trailing newline yields a final empty line. A span
/// whose clamped start equals its clamped end counts as no selection.
pub fn analyze_with_selection(text: &str, span: Option<Span>) -> DocStats {
    let total_lines = text.split('\n').count();
    let empty_lines = text.split('\n').filter(|l| l.trim().is_empty()).count();

    DocStats {
        total_lines,
        empty_lines,
        code_lines: total_lines - empty_lines,
        words: count_words(text),
        chars: count_chars(text),
        chars_no_space: count_chars_no_space(text),
        selection: span.and_then(|s| analyze_selection(text, s)),
    }
}

/// Maximal whitespace-delimited tokens. `split_whitespace` is
/// Unicode-aware, so non-ASCII separators do not skew the count.
fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Unicode scalar values, not bytes and not UTF-16 code units.
fn count_chars(text: &str) -> usize {
    text.chars().count()
}

fn count_chars_no_space(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Selection statistics over the spanned substring, using the identical
/// word/char rules as the whole-document pass. Returns `None` for a
/// degenerate (empty) span.
fn analyze_selection(text: &str, span: Span) -> Option<SelectionStats> {
    let lines: Vec<&str> = text.split('\n').collect();

    let (start_line, start_char) = clamp_position(&lines, span.start_line, span.start_char);
    let (end_line, end_char) = clamp_position(&lines, span.end_line, span.end_char);
    if (start_line, start_char) >= (end_line, end_char) {
        return None;
    }

    let selected = if start_line == end_line {
        slice_chars(lines[start_line], start_char, end_char).to_string()
    } else {
        let mut pieces = Vec::with_capacity(end_line - start_line + 1);
        pieces.push(slice_chars(lines[start_line], start_char, char_len(lines[start_line])));
        pieces.extend_from_slice(&lines[start_line + 1..end_line]);
        pieces.push(slice_chars(lines[end_line], 0, end_char));
        pieces.join("\n")
    };

    Some(SelectionStats {
        lines: end_line - start_line + 1,
        words: count_words(&selected),
        chars: count_chars(&selected),
    })
}

/// Clamp a (line, char) position into the document.
fn clamp_position(lines: &[&str], line: usize, ch: usize) -> (usize, usize) {
    let line = line.min(lines.len() - 1);
    (line, ch.min(char_len(lines[line])))
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

/// Slice a single line by scalar-value offsets. `from <= to`, both already
/// clamped to the line's char length.
fn slice_chars(line: &str, from: usize, to: usize) -> &str {
    let mut indices = line.char_indices().map(|(i, _)| i);
    let start = indices.nth(from).unwrap_or(line.len());
    let end = if to > from {
        line.char_indices()
            .map(|(i, _)| i)
            .nth(to)
            .unwrap_or(line.len())
    } else {
        start
    };
    &line[start..end]
}
