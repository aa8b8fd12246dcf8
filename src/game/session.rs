//! Per-round game session
//!
//! A `Session` owns everything a single round needs: the secret word, the attempt
//! history and, once the round ends, its outcome. Nothing outlives the round.

use super::GameError;
use crate::core::{Feedback, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use tracing::{info, trace, warn};

/// Maximum number of scored guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    guess: Word,
    feedback: Feedback,
    winning: bool,
}

impl Attempt {
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    #[must_use]
    pub const fn is_winning(&self) -> bool {
        self.winning
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
    /// The player quit, or input ran out, before the round was decided
    Aborted,
}

impl Outcome {
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Aborted => "aborted",
        })
    }
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Session {
    secret: Word,
    attempts: Vec<Attempt>,
    outcome: Option<Outcome>,
}

impl Session {
    /// Start a round with a known secret word
    #[must_use]
    pub fn new(secret: Word) -> Self {
        trace!(secret = %secret, "session created");
        Self {
            secret,
            attempts: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: None,
        }
    }

    /// Start a round with a secret drawn uniformly from `words`
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_fsm::game::Session;
    /// use wordle_fsm::wordlists::{WORDS, loader::words_from_slice};
    ///
    /// let words = words_from_slice(WORDS);
    /// let session = Session::random(&words, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert!(words.contains(session.secret()));
    /// ```
    pub fn random<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Result<Self, GameError> {
        let secret = words.choose(rng).ok_or(GameError::EmptyWordList)?;
        info!(candidates = words.len(), "secret word drawn");
        Ok(Self::new(secret.clone()))
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Attempt history, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.last()
    }

    /// Final outcome, set once the round reaches its terminal state
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Record a confirmed guess
    ///
    /// Returns `None` without touching the history once the round is decided or all
    /// `MAX_ATTEMPTS` are used.
    pub(crate) fn score(&mut self, guess: Word) -> Option<&Attempt> {
        if self.outcome.is_some() || self.attempts.len() >= MAX_ATTEMPTS {
            warn!(guess = %guess, "guess scored after the round was over; ignored");
            return None;
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        let winning = guess == self.secret;
        self.attempts.push(Attempt {
            guess,
            feedback,
            winning,
        });

        self.attempts.last()
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        info!(%outcome, attempts = self.attempts.len(), "round finished");
        self.outcome = Some(outcome);
    }
}
