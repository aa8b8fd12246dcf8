//! Wordle FSM
//!
//! A console Wordle game whose round is driven by an explicit finite state machine.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_fsm::core::Word;
//! use wordle_fsm::game::{Input, Outcome, Session, State};
//!
//! let mut session = Session::new(Word::new("apple").unwrap());
//!
//! let t = session.advance(State::WordEntry, Input::Line("apple"));
//! let t = session.advance(t.next, Input::Line("y"));
//! let t = session.advance(t.next, Input::None); // SCORE
//! let t = session.advance(t.next, Input::None); // IS_WINNER
//! assert_eq!(t.next, State::Display(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod game;

// Word lists
pub mod wordlists;

// Console drivers
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
