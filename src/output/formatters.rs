//! Formatting utilities for terminal output

use crate::core::LetterSet;

/// Width of section rules
pub const RULE_WIDTH: usize = 16;

/// Format a section heading like `=== Game Over ===`
#[must_use]
pub fn heading(title: &str) -> String {
    format!("=== {title} ===")
}

/// Horizontal rule
#[must_use]
pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Render a letter set after `label`, or `empty` when there is nothing to show
#[must_use]
pub fn letters_line(label: &str, letters: LetterSet, empty: &str) -> String {
    if letters.is_empty() {
        empty.to_string()
    } else {
        format!("{label}: {letters}")
    }
}

/// "1 attempt" / "3 attempts"
#[must_use]
pub fn attempts_phrase(count: usize) -> String {
    if count == 1 {
        "1 attempt".to_string()
    } else {
        format!("{count} attempts")
    }
}
