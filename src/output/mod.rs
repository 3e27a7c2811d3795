//! Terminal output formatting
//!
//! Transcript lines for the interactive game and pretty-printing for the
//! one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_score_result};
