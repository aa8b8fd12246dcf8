//! Word lists for secret word selection
//!
//! Provides the embedded word list compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
