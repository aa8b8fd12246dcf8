//! Game session and its state machine
//!
//! A round is a [`Session`] driven through [`State`]s by [`Session::advance`].
//! Console rendering lives in `crate::output` and the read loop in `crate::commands`.

mod config;
mod session;
mod state;

pub use config::GameConfig;
pub use session::{Attempt, MAX_ATTEMPTS, Outcome, Session};
pub use state::{Effect, Input, QUIT_COMMAND, State, Transition};

use crate::core::WordError;
use thiserror::Error;

/// Errors raised while setting up a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("word list contains no valid five-letter words")]
    EmptyWordList,
    #[error("invalid secret word: {0}")]
    InvalidSecret(#[from] WordError),
}
