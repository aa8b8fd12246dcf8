//! Main menu loop
//!
//! Offers a new round or leaving, until the player leaves or input runs out.

use super::console::Console;
use super::round::run_round;
use crate::game::GameConfig;
use crate::output::{write_farewell, write_menu};
use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Totals for one run of the menu
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
}

/// Run the main menu until the player leaves
///
/// A closed input stream is treated like choosing "Leave".
///
/// # Errors
///
/// Returns an error if a round cannot be created or console I/O fails.
pub fn run_menu<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    rng: &mut G,
) -> Result<MenuSummary> {
    let mut summary = MenuSummary::default();

    loop {
        write_menu(console.output())?;

        let Some(choice) = console.prompt("Select an option (1-2)")? else {
            debug!("input closed at menu");
            break;
        };

        match choice.trim() {
            "1" => {
                let report = run_round(console, config, rng)?;
                summary.rounds_played += 1;
                if report.outcome.is_win() {
                    summary.rounds_won += 1;
                }
                if report.input_closed {
                    break;
                }
            }
            "2" => break,
            other => {
                debug!(choice = other, "invalid menu selection");
                writeln!(console.output(), "Invalid selection - please choose 1 or 2.")?;
            }
        }
    }

    write_farewell(console.output())?;
    info!(
        rounds = summary.rounds_played,
        won = summary.rounds_won,
        "leaving"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (MenuSummary, String) {
        let config = GameConfig::default().with_secret("apple").unwrap();
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        let summary = run_menu(&mut console, &config, &mut config.rng()).unwrap();
        (summary, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn leave_immediately() {
        let (summary, out) = run("2\n");

        assert_eq!(summary, MenuSummary::default());
        assert!(out.contains("1) Play a round of Wordle"));
        assert!(out.ends_with("Thanks for Playing and come back another time!\n"));
    }

    #[test]
    fn play_twice_then_leave() {
        let (summary, out) = run("1\napple\ny\n\n1\nquit\n\n2\n");

        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.rounds_won, 1);
        assert_eq!(out.matches("=== Game Over ===").count(), 2);
        assert_eq!(out.matches("=== Wordle FSM ===").count(), 3);
    }

    #[test]
    fn invalid_selection_reprompts() {
        let (summary, out) = run("3\nplay\n2\n");

        assert_eq!(summary.rounds_played, 0);
        assert_eq!(out.matches("Invalid selection").count(), 2);
    }

    #[test]
    fn closed_input_leaves_gracefully() {
        let (summary, out) = run("");
        assert_eq!(summary.rounds_played, 0);
        assert!(out.contains("Thanks for Playing"));
    }

    #[test]
    fn closed_input_mid_round_leaves() {
        let (summary, out) = run("1\nappl");

        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.rounds_won, 0);
        assert!(out.contains("Invalid input"));
        assert!(out.contains("Thanks for Playing"));
    }
}
