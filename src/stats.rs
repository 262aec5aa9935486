// src/stats.rs
use serde::{Deserialize, Serialize};

/// Statistics for a selected region, computed with the same word/char
/// rules as the whole-document fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

/// One analysis snapshot. Built fresh per invocation and never mutated;
/// `empty_lines + code_lines == total_lines` and
/// `chars_no_space <= chars` hold for every instance the analyzer emits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DocStats {
    pub total_lines: usize,
    pub empty_lines: usize,
    pub code_lines: usize,
    pub words: usize,
    pub chars: usize,
    pub chars_no_space: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionStats>,
}
