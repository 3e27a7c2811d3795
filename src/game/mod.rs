//! Game flow
//!
//! The `Game` struct owns everything one round of play needs and is passed
//! by reference to the console session.

mod state;

pub use state::{Game, GameError, GuessOutcome, Phase, SecretSource, random_secret};
