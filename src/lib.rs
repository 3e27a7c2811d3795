//! Mastermind
//!
//! A text-based Mastermind code-breaking game with a configurable number of
//! pegs and colors.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Combination, Difficulty, Feedback, ScoringRule};
//!
//! let difficulty = Difficulty::new(4, 6);
//! let secret = Combination::parse("1 2 3 4", difficulty).unwrap();
//! let guess = Combination::parse("1 3 2 5", difficulty).unwrap();
//!
//! let feedback = Feedback::calculate(&secret, &guess, ScoringRule::Distinct);
//! assert_eq!((feedback.right(), feedback.wrong()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
