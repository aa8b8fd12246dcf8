//! Round state machine
//!
//! Each state is an enum variant carrying whatever it needs (the pending guess for
//! `Confirm` and `Score`). [`Session::advance`] is the transition function: it takes the
//! current state plus at most one line of input and returns the next state together with
//! an [`Effect`] describing what the console should show. It performs no I/O itself.
//!
//! ```text
//! WORD_ENTRY           --guess--> CONFIRM | --quit--> DISPLAY
//! CONFIRM              --y------> SCORE | --n-----> WORD_ENTRY
//! SCORE                ---------> IS_WINNER
//! IS_WINNER            --win----> DISPLAY | --miss--> REVIEW (or DISPLAY on the 6th)
//! REVIEW               ---------> CONFIRM_AFTER_REVIEW
//! CONFIRM_AFTER_REVIEW ---------> WORD_ENTRY
//! ```

use super::session::{MAX_ATTEMPTS, Outcome, Session};
use crate::core::{Feedback, Word, WordError};
use tracing::debug;

/// Sentinel that abandons the round at the guess prompt
pub const QUIT_COMMAND: &str = "quit";

/// Round state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    WordEntry,
    Confirm(Word),
    Score(Word),
    IsWinner,
    Review,
    ConfirmAfterReview,
    /// Terminal
    Display(Outcome),
}

impl State {
    /// Whether this state reads a line before it can advance
    #[must_use]
    pub const fn awaits_input(&self) -> bool {
        matches!(self, Self::WordEntry | Self::Confirm(_))
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Display(_))
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::WordEntry => "WORD_ENTRY",
            Self::Confirm(_) => "CONFIRM",
            Self::Score(_) => "SCORE",
            Self::IsWinner => "IS_WINNER",
            Self::Review => "REVIEW",
            Self::ConfirmAfterReview => "CONFIRM_AFTER_REVIEW",
            Self::Display(_) => "DISPLAY",
        }
    }
}

/// Input handed to the transition function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    /// The state does not read input
    None,
    Line(&'a str),
    /// The input stream ended; treated as "quit"
    Closed,
}

/// Console side effect of a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Guess was malformed; no attempt consumed
    GuessRejected(WordError),
    /// Confirmation answer was neither yes nor no
    AnswerRejected,
    GuessDiscarded,
    Scored { attempt: usize },
    Review(Feedback),
    Continue { remaining: usize },
    /// Player typed the quit sentinel
    Aborted,
    /// Input stream ended mid-round
    InputClosed,
}

/// Result of one step of the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub effect: Effect,
}

impl Transition {
    const fn to(next: State) -> Self {
        Self {
            next,
            effect: Effect::None,
        }
    }

    const fn with(next: State, effect: Effect) -> Self {
        Self { next, effect }
    }
}

/// Interpretation of a line typed at the confirmation prompt
enum Answer {
    Yes,
    No,
    Unknown,
}

fn parse_answer(line: &str) -> Answer {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Answer::Yes,
        "n" | "no" => Answer::No,
        _ => Answer::Unknown,
    }
}

impl Session {
    /// Advance the round by one state
    ///
    /// Only `SCORE` mutates the attempt history and only the transitions into `DISPLAY`
    /// set the outcome. Once the session has an outcome every call returns `DISPLAY` with
    /// that outcome, whatever state is passed in.
    ///
    /// # Examples
    /// ```
    /// use wordle_fsm::core::Word;
    /// use wordle_fsm::game::{Input, Session, State};
    ///
    /// let mut session = Session::new(Word::new("apple").unwrap());
    /// let t = session.advance(State::WordEntry, Input::Line("ab"));
    /// assert_eq!(t.next, State::WordEntry);
    /// assert_eq!(session.attempt_count(), 0);
    /// ```
    pub fn advance(&mut self, state: State, input: Input<'_>) -> Transition {
        let from = state.name();
        let transition = self.transition(state, input);
        debug!(from, to = transition.next.name(), effect = ?transition.effect, "transition");
        transition
    }

    fn transition(&mut self, state: State, input: Input<'_>) -> Transition {
        if let Some(outcome) = self.outcome() {
            return Transition::to(State::Display(outcome));
        }

        match state {
            State::WordEntry => match input {
                Input::Line(line) => self.word_entry(line),
                Input::Closed => self.abort(Effect::InputClosed),
                Input::None => Transition::to(State::WordEntry),
            },
            State::Confirm(guess) => match input {
                Input::Line(line) => match parse_answer(line) {
                    Answer::Yes => Transition::to(State::Score(guess)),
                    Answer::No => Transition::with(State::WordEntry, Effect::GuessDiscarded),
                    Answer::Unknown => {
                        Transition::with(State::Confirm(guess), Effect::AnswerRejected)
                    }
                },
                Input::Closed => self.abort(Effect::InputClosed),
                Input::None => Transition::to(State::Confirm(guess)),
            },
            State::Score(guess) => {
                if self.score(guess).is_some() {
                    let attempt = self.attempt_count();
                    Transition::with(State::IsWinner, Effect::Scored { attempt })
                } else {
                    Transition::to(State::IsWinner)
                }
            }
            State::IsWinner => self.is_winner(),
            State::Review => match self.last_attempt() {
                Some(attempt) => Transition::with(
                    State::ConfirmAfterReview,
                    Effect::Review(attempt.feedback()),
                ),
                None => Transition::to(State::WordEntry),
            },
            State::ConfirmAfterReview => Transition::with(
                State::WordEntry,
                Effect::Continue {
                    remaining: self.attempts_remaining(),
                },
            ),
            State::Display(outcome) => Transition::to(State::Display(outcome)),
        }
    }

    fn word_entry(&mut self, line: &str) -> Transition {
        let line = line.trim();
        if line.eq_ignore_ascii_case(QUIT_COMMAND) {
            return self.abort(Effect::Aborted);
        }

        match Word::new(line) {
            Ok(guess) => Transition::to(State::Confirm(guess)),
            Err(e) => {
                debug!(input = line, error = %e, "guess rejected");
                Transition::with(State::WordEntry, Effect::GuessRejected(e))
            }
        }
    }

    fn is_winner(&mut self) -> Transition {
        let Some(attempt) = self.last_attempt() else {
            return Transition::to(State::WordEntry);
        };

        if attempt.is_winning() {
            self.finish(Outcome::Won);
            Transition::to(State::Display(Outcome::Won))
        } else if self.attempt_count() >= MAX_ATTEMPTS {
            self.finish(Outcome::Lost);
            Transition::to(State::Display(Outcome::Lost))
        } else {
            Transition::to(State::Review)
        }
    }

    fn abort(&mut self, effect: Effect) -> Transition {
        self.finish(Outcome::Aborted);
        Transition::with(State::Display(Outcome::Aborted), effect)
    }
}
