//! Word list construction utilities
//!
//! Converts the embedded constant or a user-supplied list into validated words.

use crate::core::Word;
use tracing::debug;

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped.
///
/// # Examples
/// ```
/// use wordle_fsm::wordlists::loader::words_from_slice;
/// use wordle_fsm::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Parse a comma-separated word list such as `"apple, grape,lemon"`
///
/// Blank and invalid entries are skipped; duplicates are kept only once so that a repeated
/// word does not skew random selection.
///
/// # Examples
/// ```
/// use wordle_fsm::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("apple, grape,,x, APPLE");
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn parse_word_list(list: &str) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();

    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match Word::new(entry) {
            Ok(word) if !words.contains(&word) => words.push(word),
            Ok(_) => {}
            Err(e) => debug!(entry, error = %e, "skipping word list entry"),
        }
    }

    words
}
