//! Core domain types for Mastermind
//!
//! Combinations, difficulty bounds and the feedback evaluator. Nothing in here
//! performs I/O, so every type is testable in isolation.

mod combination;
mod difficulty;
mod feedback;

pub use combination::{Combination, CombinationError};
pub use difficulty::{
    DEFAULT_COLORS, DEFAULT_PEGS, Difficulty, DifficultyError, MAX_COLORS, MAX_PEGS, MIN_COLORS,
    MIN_PEGS,
};
pub use feedback::{Feedback, ScoringRule};
