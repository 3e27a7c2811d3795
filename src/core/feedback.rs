//! Feedback calculation for a guess against a secret
//!
//! Feedback is a pair of counts:
//! - right: digits of the guess in the correct position
//! - wrong: digits present in the secret but placed elsewhere
//!
//! Two scoring rules are supported. `Distinct` counts each digit value at
//! most once, collecting right and wrong values into sets; a value that is
//! right anywhere is never also wrong. `Standard` counts per peg, as the
//! board game does.

use super::Combination;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;
use std::str::FromStr;

/// How repeated digits are counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScoringRule {
    /// Each digit value counts at most once (sets of right and wrong values)
    #[default]
    Distinct,
    /// Per-peg counting as in the physical game
    Standard,
}

impl ScoringRule {
    /// Look up a rule by its command-line name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "distinct" | "set" => Some(Self::Distinct),
            "standard" | "classic" => Some(Self::Standard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Distinct => "distinct",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for ScoringRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses `--scoring` on the command line
impl FromStr for ScoringRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("Unknown scoring rule '{s}' (expected 'distinct' or 'standard')")
        })
    }
}

/// Right and wrong place counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    right: usize,
    wrong: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(right: usize, wrong: usize) -> Self {
        Self { right, wrong }
    }

    /// Digits in the correct position
    #[inline]
    #[must_use]
    pub const fn right(self) -> usize {
        self.right
    }

    /// Digits present in the secret but in another position
    #[inline]
    #[must_use]
    pub const fn wrong(self) -> usize {
        self.wrong
    }

    /// Whether every one of `pegs` pegs is in the right place
    #[inline]
    #[must_use]
    pub const fn is_solved(self, pegs: usize) -> bool {
        self.right == pegs && self.wrong == 0
    }

    /// Score `guess` against `secret`
    ///
    /// An exact match always scores `(pegs, 0)`, whatever the rule.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Combination, Feedback, ScoringRule};
    ///
    /// let secret = Combination::new(vec![1, 2, 3, 4]);
    /// let guess = Combination::new(vec![1, 3, 2, 5]);
    /// let feedback = Feedback::calculate(&secret, &guess, ScoringRule::Distinct);
    ///
    /// // 1 is in place, 2 and 3 are present elsewhere
    /// assert_eq!(feedback, Feedback::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Combination, guess: &Combination, rule: ScoringRule) -> Self {
        Self::from_digits(secret.digits(), guess.digits(), rule)
    }

    /// Score raw digit slices; used by the analyzer to avoid allocating
    /// a `Combination` per secret
    #[must_use]
    pub fn from_digits(secret: &[u8], guess: &[u8], rule: ScoringRule) -> Self {
        debug_assert_eq!(secret.len(), guess.len(), "combinations differ in length");

        if secret == guess {
            return Self::new(secret.len(), 0);
        }

        match rule {
            ScoringRule::Distinct => distinct(secret, guess),
            ScoringRule::Standard => standard(secret, guess),
        }
    }
}

fn distinct(secret: &[u8], guess: &[u8]) -> Feedback {
    let mut right: FxHashSet<u8> = FxHashSet::default();
    let mut wrong: FxHashSet<u8> = FxHashSet::default();

    for (&s, &g) in secret.iter().zip(guess) {
        if g == s {
            right.insert(g);
        } else if secret.contains(&g) {
            wrong.insert(g);
        }
    }

    // A value already accounted for in place is not also misplaced
    wrong.retain(|digit| !right.contains(digit));

    Feedback::new(right.len(), wrong.len())
}

fn standard(secret: &[u8], guess: &[u8]) -> Feedback {
    let mut right = 0;
    let mut secret_left: FxHashMap<u8, usize> = FxHashMap::default();
    let mut guess_left: FxHashMap<u8, usize> = FxHashMap::default();

    for (&s, &g) in secret.iter().zip(guess) {
        if g == s {
            right += 1;
        } else {
            *secret_left.entry(s).or_insert(0) += 1;
            *guess_left.entry(g).or_insert(0) += 1;
        }
    }

    let wrong = guess_left
        .iter()
        .map(|(digit, &count)| count.min(secret_left.get(digit).copied().unwrap_or(0)))
        .sum();

    Feedback::new(right, wrong)
}
