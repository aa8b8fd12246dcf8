//! Display functions for the menu and a round
//!
//! Every function writes to a caller-supplied `Write` so the console flow can be
//! exercised against an in-memory buffer.

use super::formatters::{attempts_phrase, heading, letters_line, rule};
use crate::core::Feedback;
use crate::game::{Effect, MAX_ATTEMPTS, Outcome, QUIT_COMMAND, Session, State};
use std::io::{self, Write};

/// Print the main menu
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading("Wordle FSM"))?;
    writeln!(out, "1) Play a round of Wordle")?;
    writeln!(out, "2) Leave")
}

/// Print the message shown when the player leaves
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Thanks for Playing and come back another time!")
}

/// Prompt text for a state that reads input
#[must_use]
pub fn prompt_for(state: &State) -> String {
    match state {
        State::Confirm(guess) => format!("You entered '{guess}'. Proceed? (y/n)"),
        _ => format!("\nEnter a 5-letter guess (or type '{QUIT_COMMAND}' to exit round)"),
    }
}

/// Print what a transition produced
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_effect<W: Write>(out: &mut W, effect: &Effect) -> io::Result<()> {
    match effect {
        Effect::None | Effect::Scored { .. } => Ok(()),
        Effect::GuessRejected(e) => {
            writeln!(out, "Invalid input ({e}) - please enter exactly five letters.")
        }
        Effect::AnswerRejected => writeln!(out, "Please answer with 'y' or 'n'."),
        Effect::GuessDiscarded => writeln!(out, "Guess discarded."),
        Effect::Review(feedback) => write_review(out, *feedback),
        Effect::Continue { remaining } => {
            writeln!(out, "{} remaining.", attempts_phrase(*remaining))
        }
        Effect::Aborted => writeln!(out, "Round aborted by player."),
        Effect::InputClosed => writeln!(out, "Input closed - ending round."),
    }
}

/// Print feedback for a non-winning guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_review<W: Write>(out: &mut W, feedback: Feedback) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Review ---")?;
    writeln!(
        out,
        "{}",
        letters_line(
            "Letters in the word (any position)",
            feedback.present(),
            "No letters from your guess are in the secret word."
        )
    )?;
    writeln!(
        out,
        "{}",
        letters_line(
            "Letters in the correct position",
            feedback.correct(),
            "No letters are in the correct position."
        )
    )?;
    writeln!(out, "{}", rule())
}

/// Print the end-of-round summary: secret, every attempt in order, and the outcome
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_summary<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading("Game Over"))?;
    writeln!(out, "Secret word: {}", session.secret())?;
    writeln!(
        out,
        "Attempts used: {}/{MAX_ATTEMPTS}",
        session.attempt_count()
    )?;

    if session.attempts().is_empty() {
        writeln!(out, "No guesses were scored.")?;
    } else {
        writeln!(out, "Your guesses:")?;
        for (i, attempt) in session.attempts().iter().enumerate() {
            writeln!(out, "  {}: {}", i + 1, attempt.guess())?;
        }
    }

    writeln!(out)?;
    match session.outcome() {
        Some(Outcome::Won) => writeln!(out, "You Won!"),
        Some(Outcome::Lost) => writeln!(out, "You Lost."),
        Some(Outcome::Aborted) | None => writeln!(out, "Round aborted."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, WordError};
    use crate::game::Input;

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn menu_lists_both_options() {
        let text = render(write_menu::<Vec<u8>>);
        assert!(text.contains("1) Play a round of Wordle"));
        assert!(text.contains("2) Leave"));
    }

    #[test]
    fn review_lists_both_sets() {
        let feedback = Feedback::calculate(&word("eagle"), &word("apple"));
        let text = render(|out| write_review(out, feedback));

        assert!(text.contains("Letters in the word (any position): a, e, l"));
        assert!(text.contains("Letters in the correct position: e, l"));
    }

    #[test]
    fn review_reports_empty_sets() {
        let feedback = Feedback::calculate(&word("brick"), &word("mango"));
        let text = render(|out| write_review(out, feedback));

        assert!(text.contains("No letters from your guess are in the secret word."));
        assert!(text.contains("No letters are in the correct position."));
    }

    #[test]
    fn confirm_prompt_echoes_guess() {
        assert_eq!(
            prompt_for(&State::Confirm(word("eagle"))),
            "You entered 'eagle'. Proceed? (y/n)"
        );
        assert!(prompt_for(&State::WordEntry).contains("'quit'"));
    }

    #[test]
    fn effect_messages() {
        let rejected = Effect::GuessRejected(WordError::InvalidLength(2));
        assert!(render(|out| write_effect(out, &rejected)).starts_with("Invalid input"));
        assert_eq!(
            render(|out| write_effect(out, &Effect::Continue { remaining: 1 })),
            "1 attempt remaining.\n"
        );
        assert_eq!(render(|out| write_effect(out, &Effect::None)), "");
        assert_eq!(
            render(|out| write_effect(out, &Effect::Aborted)),
            "Round aborted by player.\n"
        );
        assert_eq!(
            render(|out| write_effect(out, &Effect::InputClosed)),
            "Input closed - ending round.\n"
        );
    }

    #[test]
    fn summary_lists_attempts_in_order() {
        let mut session = Session::new(word("apple"));
        for guess in ["eagle", "apple"] {
            let t = session.advance(State::Confirm(word(guess)), Input::Line("y"));
            let t = session.advance(t.next, Input::None);
            session.advance(t.next, Input::None);
        }

        let text = render(|out| write_summary(out, &session));
        assert!(text.contains("Secret word: apple"));
        assert!(text.contains("Attempts used: 2/6"));
        assert!(text.contains("  1: eagle\n  2: apple\n"));
        assert!(text.contains("You Won!"));
    }

    #[test]
    fn summary_for_aborted_round() {
        let mut session = Session::new(word("apple"));
        session.advance(State::WordEntry, Input::Line("quit"));

        let text = render(|out| write_summary(out, &session));
        assert!(text.contains("Attempts used: 0/6"));
        assert!(text.contains("No guesses were scored."));
        assert!(text.contains("Round aborted."));
    }
}
