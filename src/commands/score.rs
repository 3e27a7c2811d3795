//! One-shot scoring command
//!
//! Scores a single guess against a secret given on the command line.

use crate::core::{Combination, CombinationError, Difficulty, Feedback, ScoringRule};
use anyhow::{Context, Result, bail};

/// Result of scoring one guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub secret: Combination,
    pub guess: Combination,
    pub difficulty: Difficulty,
    pub rule: ScoringRule,
    /// `None` when the guess is the all-zero give-up
    pub feedback: Option<Feedback>,
}

/// Resolve the color count for command-line combinations: the requested
/// value, or else the largest digit seen, clamped like any difficulty
pub(crate) fn resolve_difficulty(pegs: usize, colors: Option<u8>, max_digit: u8) -> Difficulty {
    Difficulty::from_counts(pegs, colors.unwrap_or(max_digit))
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if:
/// - Either combination cannot be parsed
/// - The combinations differ in length
/// - A digit is outside the color range
/// - The secret is the all-zero sentinel
pub fn score_guess(
    secret: &str,
    guess: &str,
    colors: Option<u8>,
    rule: ScoringRule,
) -> Result<ScoreResult> {
    let secret: Combination = secret.parse().context("Invalid secret")?;
    let guess: Combination = guess.parse().context("Invalid guess")?;

    if guess.len() != secret.len() {
        return Err(CombinationError::WrongLength {
            expected: secret.len(),
            found: guess.len(),
        })
        .context("Invalid guess");
    }

    if secret.is_all_zeros() {
        bail!("The secret cannot be all zeros; random secrets exist only in a game");
    }

    let difficulty = resolve_difficulty(
        secret.len(),
        colors,
        secret.max_digit().max(guess.max_digit()),
    );
    secret.validate(difficulty).context("Invalid secret")?;
    guess.validate(difficulty).context("Invalid guess")?;

    let feedback = (!guess.is_all_zeros()).then(|| Feedback::calculate(&secret, &guess, rule));

    Ok(ScoreResult {
        secret,
        guess,
        difficulty,
        rule,
        feedback,
    })
}
