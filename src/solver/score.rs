//! Ranked letter scores

use std::fmt;

/// How good a letter is as the next guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    /// Number of candidates containing the letter at least once
    Count(usize),
    /// Average information in bits
    Bits(f64),
}

impl Metric {
    /// The metric as a float, for comparisons and charts
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::Count(count) => count as f64,
            Self::Bits(bits) => bits,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Bits(bits) => write!(f, "{bits:.3} bits"),
        }
    }
}

/// A letter paired with its metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScore {
    pub letter: char,
    pub metric: Metric,
}

impl LetterScore {
    #[must_use]
    pub const fn count(letter: char, count: usize) -> Self {
        Self {
            letter,
            metric: Metric::Count(count),
        }
    }

    #[must_use]
    pub const fn bits(letter: char, bits: f64) -> Self {
        Self {
            letter,
            metric: Metric::Bits(bits),
        }
    }
}
