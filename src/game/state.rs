//! Game state machine
//!
//! `Setup` → `Guessing` (repeats) → `Won` | `Lost`

use crate::core::{Combination, CombinationError, Difficulty, Feedback, ScoringRule};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Guessing,
    Won,
    Lost,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Setup => "setup",
            Self::Guessing => "guessing",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Where the secret came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Given,
    Random,
}

/// Result of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a match; the game goes on
    Scored(Feedback),
    /// The guess matched the secret
    Won { guesses: usize },
    /// The guesser gave up with the all-zero combination
    Lost { secret: Combination },
}

/// Error type for illegal game transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    WrongPhase { expected: Phase, actual: Phase },
    Invalid(CombinationError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPhase { expected, actual } => {
                write!(f, "Game is in the {actual} phase, expected {expected}")
            }
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<CombinationError> for GameError {
    fn from(err: CombinationError) -> Self {
        Self::Invalid(err)
    }
}

/// One game of Mastermind
#[derive(Debug, Clone)]
pub struct Game {
    difficulty: Difficulty,
    rule: ScoringRule,
    secret: Combination,
    phase: Phase,
    history: Vec<(Combination, Option<Feedback>)>,
}

impl Game {
    /// Start a game in the `Setup` phase
    #[must_use]
    pub fn new(difficulty: Difficulty, rule: ScoringRule) -> Self {
        Self {
            difficulty,
            rule,
            secret: Combination::zeros(difficulty.pegs()),
            phase: Phase::Setup,
            history: Vec::new(),
        }
    }

    /// Fix the secret and move to `Guessing`
    ///
    /// The all-zero combination asks for a random secret drawn from `rng`.
    ///
    /// # Errors
    /// Returns `GameError` if the game is past setup or the secret does not
    /// fit the difficulty.
    pub fn set_secret<R: Rng>(
        &mut self,
        secret: Combination,
        rng: &mut R,
    ) -> Result<SecretSource, GameError> {
        self.expect_phase(Phase::Setup)?;
        secret.validate(self.difficulty)?;

        let source = if secret.is_all_zeros() {
            self.secret = random_secret(self.difficulty, rng);
            SecretSource::Random
        } else {
            self.secret = secret;
            SecretSource::Given
        };

        self.phase = Phase::Guessing;
        debug!(?source, "secret ready");
        trace!(secret = %self.secret, "secret");
        Ok(source)
    }

    /// Score a guess and advance the state machine
    ///
    /// Every submitted guess counts, including the all-zero give-up.
    ///
    /// # Errors
    /// Returns `GameError` if the game is not in `Guessing` or the guess
    /// does not fit the difficulty.
    pub fn submit_guess(&mut self, guess: Combination) -> Result<GuessOutcome, GameError> {
        self.expect_phase(Phase::Guessing)?;
        guess.validate(self.difficulty)?;

        if guess == self.secret {
            self.history.push((guess, None));
            self.phase = Phase::Won;
            info!(guesses = self.guesses(), "game won");
            return Ok(GuessOutcome::Won {
                guesses: self.guesses(),
            });
        }

        if guess.is_all_zeros() {
            self.history.push((guess, None));
            self.phase = Phase::Lost;
            info!(guesses = self.guesses(), "game given up");
            return Ok(GuessOutcome::Lost {
                secret: self.secret.clone(),
            });
        }

        let feedback = Feedback::calculate(&self.secret, &guess, self.rule);
        debug!(
            guess = %guess,
            right = feedback.right(),
            wrong = feedback.wrong(),
            "guess scored"
        );
        self.history.push((guess, Some(feedback)));
        Ok(GuessOutcome::Scored(feedback))
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn rule(&self) -> ScoringRule {
        self.rule
    }

    /// The secret; all zeros until setup is done
    #[must_use]
    pub const fn secret(&self) -> &Combination {
        &self.secret
    }

    /// Number of guesses submitted so far
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.history.len()
    }

    /// Submitted guesses with their feedback; the final winning or
    /// give-up guess has none
    #[must_use]
    pub fn history(&self) -> &[(Combination, Option<Feedback>)] {
        &self.history
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Won | Phase::Lost)
    }
}

/// Draw a secret with every digit uniform in `[1, colors]`
pub fn random_secret<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Combination {
    let digits = (0..difficulty.pegs())
        .map(|_| rng.random_range(1..=difficulty.colors()))
        .collect();
    Combination::new(digits)
}
