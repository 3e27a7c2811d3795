//! Game difficulty: how many pegs a combination has and how many colors a peg may take.

use std::fmt;
use std::str::FromStr;

/// Fewest pegs a combination may have
pub const MIN_PEGS: usize = 2;
/// Most pegs a combination may have
pub const MAX_PEGS: usize = 8;
/// Fewest colors a peg may take
pub const MIN_COLORS: u8 = 6;
/// Most colors a peg may take
pub const MAX_COLORS: u8 = 20;

/// Pegs used when only the color count is given on the command line
pub const DEFAULT_PEGS: usize = 4;
/// Colors used when only the peg count is given on the command line
pub const DEFAULT_COLORS: u8 = 6;

/// Peg and color counts for one game
///
/// Always within `[MIN_PEGS, MAX_PEGS]` and `[MIN_COLORS, MAX_COLORS]`:
/// out-of-range requests are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pegs: usize,
    colors: u8,
}

/// Error type for an unreadable difficulty line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    MissingValue,
    NotANumber(String),
}

impl fmt::Display for DifficultyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue => write!(f, "Enter two numbers: pegs and colors."),
            Self::NotANumber(token) => write!(f, "'{token}' is not a number."),
        }
    }
}

impl std::error::Error for DifficultyError {}

impl Difficulty {
    /// Create a difficulty, clamping both counts into their allowed ranges
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Difficulty;
    ///
    /// let d = Difficulty::new(1, 30);
    /// assert_eq!(d.pegs(), 2);
    /// assert_eq!(d.colors(), 20);
    /// ```
    #[must_use]
    pub fn new(pegs: i64, colors: i64) -> Self {
        Self {
            pegs: clamp_pegs(pegs),
            colors: clamp_colors(colors),
        }
    }

    /// Create a difficulty from unsigned counts, clamping like [`Difficulty::new`]
    #[must_use]
    pub fn from_counts(pegs: usize, colors: u8) -> Self {
        Self {
            pegs: pegs.clamp(MIN_PEGS, MAX_PEGS),
            colors: colors.clamp(MIN_COLORS, MAX_COLORS),
        }
    }

    /// Replace whichever counts are given, keeping the others
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Difficulty;
    ///
    /// let d = Difficulty::default().with_counts(None, Some(99));
    /// assert_eq!(d.pegs(), 4);
    /// assert_eq!(d.colors(), 20);
    /// ```
    #[must_use]
    pub fn with_counts(self, pegs: Option<i64>, colors: Option<i64>) -> Self {
        Self {
            pegs: pegs.map_or(self.pegs, clamp_pegs),
            colors: colors.map_or(self.colors, clamp_colors),
        }
    }

    #[inline]
    #[must_use]
    pub const fn pegs(self) -> usize {
        self.pegs
    }

    #[inline]
    #[must_use]
    pub const fn colors(self) -> u8 {
        self.colors
    }

    /// Whether `digit` is a color of this game
    #[inline]
    #[must_use]
    pub const fn is_color(self, digit: u8) -> bool {
        digit >= 1 && digit <= self.colors
    }

    /// Number of distinct secrets this difficulty allows, or `None` on overflow
    #[must_use]
    pub fn secret_space(self) -> Option<u64> {
        u64::from(self.colors).checked_pow(u32::try_from(self.pegs).ok()?)
    }
}

fn clamp_pegs(pegs: i64) -> usize {
    if pegs < 0 {
        return MIN_PEGS;
    }
    usize::try_from(pegs).map_or(MAX_PEGS, |pegs| pegs.clamp(MIN_PEGS, MAX_PEGS))
}

fn clamp_colors(colors: i64) -> u8 {
    if colors < 0 {
        return MIN_COLORS;
    }
    u8::try_from(colors).map_or(MAX_COLORS, |colors| colors.clamp(MIN_COLORS, MAX_COLORS))
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            pegs: DEFAULT_PEGS,
            colors: DEFAULT_COLORS,
        }
    }
}

/// Parse a `"pegs colors"` line; extra tokens are ignored
impl FromStr for Difficulty {
    type Err = DifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| DifficultyError::NotANumber(token.to_string()))
            });

        let pegs = values.next().ok_or(DifficultyError::MissingValue)??;
        let colors = values.next().ok_or(DifficultyError::MissingValue)??;

        Ok(Self::new(pegs, colors))
    }
}
