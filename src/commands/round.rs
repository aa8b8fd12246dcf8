//! Single round driver
//!
//! Feeds console lines into the session's state machine and renders each effect until the
//! round reaches `DISPLAY`.

use super::console::Console;
use crate::game::{GameConfig, Input, Outcome, Session, State};
use crate::output::{prompt_for, write_effect, write_summary};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};

/// How a round ended, as seen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: Outcome,
    /// Input ran out during the round; the caller should stop as well
    pub input_closed: bool,
}

/// Play `session` to completion
///
/// After the summary the player is asked to press Enter before control returns.
///
/// # Errors
///
/// Returns an error if reading from or writing to the console fails.
pub fn play_round<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut session: Session,
) -> Result<RoundReport> {
    let mut state = State::WordEntry;
    let mut input_closed = false;

    let outcome = loop {
        if let State::Display(outcome) = state {
            break outcome;
        }

        let line = if state.awaits_input() {
            Some(console.prompt(&prompt_for(&state))?)
        } else {
            None
        };

        let input = match &line {
            None => Input::None,
            Some(None) => {
                input_closed = true;
                Input::Closed
            }
            Some(Some(text)) => Input::Line(text),
        };

        let transition = session.advance(state, input);
        write_effect(console.output(), &transition.effect)?;
        state = transition.next;
    };

    write_summary(console.output(), &session)?;

    if !input_closed
        && console
            .prompt("\nPress Enter to return to the main menu...")?
            .is_none()
    {
        input_closed = true;
    }

    Ok(RoundReport {
        outcome,
        input_closed,
    })
}

/// Play exactly one round using `config`
///
/// # Errors
///
/// Returns an error if no session can be created or console I/O fails.
pub fn run_round<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    rng: &mut G,
) -> Result<RoundReport> {
    let session = config.new_session(rng)?;
    play_round(console, session)
}
