//! Combination representation
//!
//! A Combination is an ordered row of pegs, each holding a color digit.
//! The all-zero combination is a sentinel: as a secret it asks for a random
//! one, as a guess it means the guesser gives up.

use super::Difficulty;
use super::difficulty::{MAX_COLORS, MAX_PEGS, MIN_PEGS};
use std::fmt;
use std::str::FromStr;

/// An ordered row of color digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    digits: Vec<u8>,
}

/// Error type for invalid combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinationError {
    Empty,
    NotANumber(String),
    WrongLength { expected: usize, found: usize },
    OutOfRange { digit: i64, colors: u8 },
    PegCount(usize),
}

impl fmt::Display for CombinationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Combination is empty."),
            Self::NotANumber(token) => write!(f, "'{token}' is not a number."),
            Self::WrongLength { expected, found } => {
                write!(f, "Enter exactly {expected} numbers, got {found}.")
            }
            Self::OutOfRange { colors, .. } => {
                write!(f, "Numbers must be between 1 and {colors}.")
            }
            Self::PegCount(count) => write!(
                f,
                "Combinations must have between {MIN_PEGS} and {MAX_PEGS} pegs, got {count}."
            ),
        }
    }
}

impl std::error::Error for CombinationError {}

/// Split on whitespace and commas, dropping empty tokens
fn tokens(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

impl Combination {
    /// Create a combination from raw digits without validation
    #[must_use]
    pub const fn new(digits: Vec<u8>) -> Self {
        Self { digits }
    }

    /// The all-zero sentinel of the given length
    #[must_use]
    pub fn zeros(pegs: usize) -> Self {
        Self {
            digits: vec![0; pegs],
        }
    }

    /// Parse one line of input against a difficulty
    ///
    /// The line must hold exactly `pegs` numbers separated by whitespace or
    /// commas, each in `[1, colors]`, unless the whole line is zeros.
    ///
    /// # Errors
    /// Returns `CombinationError` if a token is not a number, the count is
    /// not `pegs`, or a digit is outside the color range.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Combination, CombinationError, Difficulty};
    ///
    /// let difficulty = Difficulty::new(4, 6);
    /// let combo = Combination::parse("1 2 3 4", difficulty).unwrap();
    /// assert_eq!(combo.digits(), &[1, 2, 3, 4]);
    ///
    /// assert!(Combination::parse("0 0 0 0", difficulty).unwrap().is_all_zeros());
    /// assert!(matches!(
    ///     Combination::parse("1 2 3 9", difficulty),
    ///     Err(CombinationError::OutOfRange { digit: 9, colors: 6 })
    /// ));
    /// ```
    pub fn parse(input: &str, difficulty: Difficulty) -> Result<Self, CombinationError> {
        let values = tokens(input)
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| CombinationError::NotANumber(token.to_string()))
            })
            .collect::<Result<Vec<i64>, _>>()?;

        if values.len() != difficulty.pegs() {
            return Err(CombinationError::WrongLength {
                expected: difficulty.pegs(),
                found: values.len(),
            });
        }

        if values.iter().all(|&v| v == 0) {
            return Ok(Self::zeros(difficulty.pegs()));
        }

        let colors = difficulty.colors();
        let digits = values
            .into_iter()
            .map(|digit| match u8::try_from(digit) {
                Ok(d) if difficulty.is_color(d) => Ok(d),
                _ => Err(CombinationError::OutOfRange { digit, colors }),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self { digits })
    }

    /// Check this combination against a difficulty
    ///
    /// The all-zero sentinel of the right length is always valid.
    ///
    /// # Errors
    /// Returns `CombinationError` if the length is not `pegs` or a digit is
    /// outside `[1, colors]`.
    pub fn validate(&self, difficulty: Difficulty) -> Result<(), CombinationError> {
        if self.digits.len() != difficulty.pegs() {
            return Err(CombinationError::WrongLength {
                expected: difficulty.pegs(),
                found: self.digits.len(),
            });
        }

        if self.is_all_zeros() {
            return Ok(());
        }

        match self.digits.iter().find(|&&d| !difficulty.is_color(d)) {
            Some(&digit) => Err(CombinationError::OutOfRange {
                digit: i64::from(digit),
                colors: difficulty.colors(),
            }),
            None => Ok(()),
        }
    }

    /// Whether every peg is zero (random-secret or give-up sentinel)
    #[inline]
    #[must_use]
    pub fn is_all_zeros(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of pegs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Largest digit, or 0 for an empty combination
    #[must_use]
    pub fn max_digit(&self) -> u8 {
        self.digits.iter().copied().max().unwrap_or(0)
    }
}

/// Space-separated digits, e.g. `1 2 3 4`
impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Loose parse without a difficulty: any digits 0-255, any length from
/// `MIN_PEGS` to `MAX_PEGS`. Color range checks are left to
/// [`Combination::validate`]; numbers that cannot be a digit at all are
/// reported against `MAX_COLORS`.
impl FromStr for Combination {
    type Err = CombinationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = tokens(s)
            .map(|token| {
                let value = token
                    .parse::<i64>()
                    .map_err(|_| CombinationError::NotANumber(token.to_string()))?;
                u8::try_from(value).map_err(|_| CombinationError::OutOfRange {
                    digit: value,
                    colors: MAX_COLORS,
                })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        if digits.is_empty() {
            return Err(CombinationError::Empty);
        }
        if !(MIN_PEGS..=MAX_PEGS).contains(&digits.len()) {
            return Err(CombinationError::PegCount(digits.len()));
        }

        Ok(Self { digits })
    }
}
