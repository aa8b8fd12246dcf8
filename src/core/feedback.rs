//! Guess feedback calculation
//!
//! Feedback is set based: it reports *which* letters of the guess occur in the secret and
//! which sit at the same index, without counting repeated letters. A guess of "lllll"
//! against "hello" reports `l` as both present and correctly placed, nothing more.

use super::{LetterSet, Word};

/// Feedback for a single guess against the secret word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    present: LetterSet,
    correct: LetterSet,
}

impl Feedback {
    /// Calculate feedback when `guess` is played against `secret`
    ///
    /// - present: letters of the guess that occur anywhere in the secret
    /// - correct: letters of the guess that match the secret at the same index
    ///
    /// # Examples
    /// ```
    /// use wordle_fsm::core::{Feedback, Word};
    ///
    /// let guess = Word::new("eagle").unwrap();
    /// let secret = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.present().to_string(), "a, e, l");
    /// assert_eq!(feedback.correct().to_string(), "e, l");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let present = guess.letters().intersection(secret.letters());

        let correct = guess
            .chars()
            .iter()
            .zip(secret.chars())
            .filter(|(g, s)| g == s)
            .map(|(&g, _)| g)
            .collect();

        Self { present, correct }
    }

    /// Letters in the word at any position
    #[inline]
    #[must_use]
    pub const fn present(self) -> LetterSet {
        self.present
    }

    /// Letters in the correct position
    #[inline]
    #[must_use]
    pub const fn correct(self) -> LetterSet {
        self.correct
    }
}
