//! Command implementations

pub mod console;
pub mod menu;
pub mod round;

pub use console::Console;
pub use menu::{MenuSummary, run_menu};
pub use round::{RoundReport, play_round, run_round};
