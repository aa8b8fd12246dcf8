//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and cheap to copy or clone.

mod feedback;
mod letters;
mod word;

pub use feedback::Feedback;
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
