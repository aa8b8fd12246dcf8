//! Terminal output formatting
//!
//! Plain-text rendering of menus, prompts, feedback and round summaries.

pub mod display;
pub mod formatters;

pub use display::{
    prompt_for, write_effect, write_farewell, write_menu, write_review, write_summary,
};
