//! Guess analysis command
//!
//! Scores one guess against every possible secret and reports how the
//! secrets split by feedback. This describes a single guess; it never
//! suggests one.

use super::score::resolve_difficulty;
use crate::core::{Combination, Difficulty, Feedback, ScoringRule};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Largest secret space the analyzer will enumerate
pub const MAX_ANALYZE_SPACE: u64 = 10_000_000;

/// Secrets scored per parallel work item
const CHUNK_SIZE: u64 = 1 << 14;

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub guess: Combination,
    pub difficulty: Difficulty,
    pub rule: ScoringRule,
    pub total_secrets: u64,
    /// Feedback classes, most right pegs first
    pub classes: Vec<(Feedback, u64)>,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub worst_case: u64,
}

/// Analyze how `guess` partitions every secret of its difficulty
///
/// # Errors
///
/// Returns an error if:
/// - The guess cannot be parsed or is outside the color range
/// - The guess is the all-zero give-up
/// - The secret space exceeds [`MAX_ANALYZE_SPACE`]
pub fn analyze_guess(
    guess: &str,
    colors: Option<u8>,
    rule: ScoringRule,
    show_progress: bool,
) -> Result<AnalysisResult> {
    let guess: Combination = guess.parse().context("Invalid guess")?;
    if guess.is_all_zeros() {
        bail!("The all-zero combination gives up; there is nothing to analyze");
    }

    let difficulty = resolve_difficulty(guess.len(), colors, guess.max_digit());
    guess.validate(difficulty).context("Invalid guess")?;

    let total_secrets = match difficulty.secret_space() {
        Some(space) if space <= MAX_ANALYZE_SPACE => space,
        _ => bail!(
            "{} pegs with {} colors is too many secrets to enumerate (limit {MAX_ANALYZE_SPACE})",
            difficulty.pegs(),
            difficulty.colors()
        ),
    };

    let progress = if show_progress {
        progress_bar(total_secrets.div_ceil(CHUNK_SIZE))
    } else {
        ProgressBar::hidden()
    };
    let counts = feedback_distribution(&guess, difficulty, rule, &progress);
    progress.finish_and_clear();

    let mut classes: Vec<(Feedback, u64)> = counts.into_iter().collect();
    classes.sort_by(|(a, _), (b, _)| {
        b.right()
            .cmp(&a.right())
            .then_with(|| b.wrong().cmp(&a.wrong()))
    });

    let entropy = shannon_entropy(classes.iter().map(|&(_, c)| c), total_secrets);
    let expected_remaining = classes
        .iter()
        .map(|&(_, c)| (c as f64) * (c as f64))
        .sum::<f64>()
        / total_secrets as f64;
    let worst_case = classes.iter().map(|&(_, c)| c).max().unwrap_or(0);

    Ok(AnalysisResult {
        guess,
        difficulty,
        rule,
        total_secrets,
        classes,
        entropy,
        expected_remaining,
        worst_case,
    })
}

fn progress_bar(chunks: u64) -> ProgressBar {
    let pb = ProgressBar::new(chunks);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {percent}% scoring secrets")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Count secrets by the feedback `guess` receives against them
///
/// Secrets are enumerated by index: index `i` written in base `colors`
/// gives the digits, each shifted up by one.
#[must_use]
pub fn feedback_distribution(
    guess: &Combination,
    difficulty: Difficulty,
    rule: ScoringRule,
    progress: &ProgressBar,
) -> FxHashMap<Feedback, u64> {
    let Some(total) = difficulty.secret_space() else {
        return FxHashMap::default();
    };
    let chunks = total.div_ceil(CHUNK_SIZE);

    (0..chunks)
        .into_par_iter()
        .map(|chunk| {
            let start = chunk * CHUNK_SIZE;
            let end = (start + CHUNK_SIZE).min(total);
            let mut counts: FxHashMap<Feedback, u64> = FxHashMap::default();
            let mut secret = vec![0u8; difficulty.pegs()];

            for index in start..end {
                decode_secret(index, difficulty.colors(), &mut secret);
                let feedback = Feedback::from_digits(&secret, guess.digits(), rule);
                *counts.entry(feedback).or_insert(0) += 1;
            }

            progress.inc(1);
            counts
        })
        .reduce(FxHashMap::default, |mut acc, counts| {
            for (feedback, count) in counts {
                *acc.entry(feedback).or_insert(0) += count;
            }
            acc
        })
}

/// Write the digits of secret number `index` into `digits`
fn decode_secret(mut index: u64, colors: u8, digits: &mut [u8]) {
    let base = u64::from(colors);
    for digit in digits.iter_mut() {
        *digit = (index % base) as u8 + 1;
        index /= base;
    }
}

/// Shannon entropy in bits of a distribution given as counts
///
/// H = -Σ p * log₂(p)
fn shannon_entropy(counts: impl Iterator<Item = u64>, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .filter(|&c| c > 0)
        .map(|c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_covers_every_secret_once() {
        let difficulty = Difficulty::new(2, 6);
        let mut seen = std::collections::HashSet::new();
        let mut secret = [0u8; 2];
        for index in 0..36 {
            decode_secret(index, 6, &mut secret);
            assert!(secret.iter().all(|&d| difficulty.is_color(d)));
            seen.insert(secret);
        }
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn distribution_sums_to_space() {
        let guess = Combination::new(vec![1, 2, 3]);
        let difficulty = Difficulty::new(3, 6);
        let counts =
            feedback_distribution(&guess, difficulty, ScoringRule::Distinct, &ProgressBar::hidden());

        assert_eq!(counts.values().sum::<u64>(), 216);
        assert_eq!(counts.get(&Feedback::new(3, 0)), Some(&1));
    }

    #[test]
    fn analyze_two_pegs() {
        let result = analyze_guess("1 2", Some(6), ScoringRule::Distinct, false).unwrap();

        assert_eq!(result.total_secrets, 36);
        assert_eq!(result.classes.iter().map(|&(_, c)| c).sum::<u64>(), 36);
        // Solved class sorts first
        assert_eq!(result.classes[0], (Feedback::new(2, 0), 1));
        // Neither 1 nor 2 anywhere: 4 * 4 secrets
        assert!(result.classes.contains(&(Feedback::new(0, 0), 16)));
        assert_eq!(result.worst_case, 16);
    }

    #[test]
    fn analyze_metrics_are_bounded() {
        let result = analyze_guess("1 1 2 2", None, ScoringRule::Standard, false).unwrap();

        assert_eq!(result.total_secrets, 1296);
        assert!(result.entropy > 0.0);
        assert!(result.entropy <= (result.classes.len() as f64).log2() + 1e-9);
        assert!(result.expected_remaining >= 1.0);
        assert!(result.expected_remaining <= result.worst_case as f64);
    }

    #[test]
    fn analyze_rejects_large_space() {
        // 20^8 secrets
        let err = analyze_guess("1 2 3 4 5 6 7 8", Some(20), ScoringRule::Distinct, false);
        assert!(err.is_err());
    }

    #[test]
    fn analyze_rejects_give_up() {
        assert!(analyze_guess("0 0 0", None, ScoringRule::Distinct, false).is_err());
    }

    #[test]
    fn entropy_of_uniform_split() {
        let h = shannon_entropy([1, 1, 1, 1].into_iter(), 4);
        assert!((h - 2.0).abs() < 1e-12);
        assert!(shannon_entropy([5].into_iter(), 5).abs() < 1e-12);
        assert!(shannon_entropy(std::iter::empty(), 0).abs() < 1e-12);
    }
}
