//! Round configuration
//!
//! The word list and an optional fixed secret are the only adjustable parameters of a
//! round. A seed makes random selection reproducible.

use super::{GameError, Session};
use crate::core::Word;
use crate::wordlists::{WORDS, loader::words_from_slice};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration shared by every round of a run
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub words: Vec<Word>,
    pub secret: Option<Word>,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            words: words_from_slice(WORDS),
            secret: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Use `words` instead of the built-in list
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if `words` is empty.
    pub fn with_words(mut self, words: Vec<Word>) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        self.words = words;
        Ok(self)
    }

    /// Fix the secret word for every round
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidSecret` if `secret` is not five ASCII letters.
    pub fn with_secret(mut self, secret: &str) -> Result<Self, GameError> {
        self.secret = Some(Word::new(secret)?);
        Ok(self)
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Random source for secret selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
    }

    /// Start a new round
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyWordList` if no fixed secret is set and the word list is empty.
    pub fn new_session<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Session, GameError> {
        match &self.secret {
            Some(secret) => Ok(Session::new(secret.clone())),
            None => Session::random(&self.words, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_builtin_words() {
        let config = GameConfig::default();
        assert_eq!(config.words.len(), WORDS.len());
        assert!(config.secret.is_none());
    }

    #[test]
    fn fixed_secret_wins_over_word_list() {
        let config = GameConfig::default().with_secret("Ocean").unwrap();
        let mut rng = config.rng();

        for _ in 0..3 {
            let session = config.new_session(&mut rng).unwrap();
            assert_eq!(session.secret().text(), "ocean");
        }
    }

    #[test]
    fn invalid_secret_is_rejected() {
        assert!(matches!(
            GameConfig::default().with_secret("ab"),
            Err(GameError::InvalidSecret(_))
        ));
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert_eq!(
            GameConfig::default().with_words(Vec::new()).unwrap_err(),
            GameError::EmptyWordList
        );
    }

    #[test]
    fn custom_words_are_used() {
        let words = vec![Word::new("lemon").unwrap()];
        let config = GameConfig::default().with_words(words).unwrap();
        let session = config.new_session(&mut config.rng()).unwrap();
        assert_eq!(session.secret().text(), "lemon");
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = GameConfig::default().with_seed(1234);
        let a = config.new_session(&mut config.rng()).unwrap();
        let b = config.new_session(&mut config.rng()).unwrap();
        assert_eq!(a.secret(), b.secret());
    }
}
