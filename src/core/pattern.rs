//! Partially revealed hangman word
//!
//! A pattern is one cell per letter of the hidden word. Each cell is either a revealed
//! letter or unknown; in text form unknown cells are written as `_`:
//!
//! ```text
//! a _ p _ e   ->   "a_p_e"
//! ```

use super::Word;
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::str::FromStr;

/// Text marker for an unknown cell
pub const UNKNOWN_MARKER: char = '_';

/// A single position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Unknown,
    Revealed(char),
}

impl Cell {
    /// The revealed letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Revealed(letter) => Some(letter),
            Self::Unknown => None,
        }
    }
}

/// The revealed state of a hidden word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Cell>,
}

impl Pattern {
    /// A pattern of `len` unknown cells, the start of every round
    #[must_use]
    pub fn unknown(len: usize) -> Self {
        Self {
            cells: vec![Cell::Unknown; len],
        }
    }

    /// Parse a pattern such as `"a__le"`
    ///
    /// Letters are lowercased; `_` marks an unknown cell.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidPattern` if the string is empty or contains whitespace.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Cell, Pattern};
    ///
    /// let pattern = Pattern::parse("A__le").unwrap();
    /// assert_eq!(pattern.len(), 5);
    /// assert_eq!(pattern.cell(0), Cell::Revealed('a'));
    /// assert_eq!(pattern.cell(1), Cell::Unknown);
    /// assert_eq!(pattern.to_string(), "a__le");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(SolverError::InvalidPattern("pattern is empty".to_string()));
        }

        let mut cells = Vec::with_capacity(s.len());
        for ch in s.chars() {
            if ch == UNKNOWN_MARKER {
                cells.push(Cell::Unknown);
            } else if ch.is_whitespace() || ch.is_control() {
                return Err(SolverError::InvalidPattern(format!(
                    "'{s}' contains whitespace"
                )));
            } else {
                cells.extend(ch.to_lowercase().map(Cell::Revealed));
            }
        }

        Ok(Self { cells })
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn cell(&self, position: usize) -> Cell {
        self.cells[position]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of unknown cells left
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Unknown).count()
    }

    /// True once no cell is unknown
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Unknown)
    }

    /// Distinct letters revealed anywhere in the pattern
    #[must_use]
    pub fn revealed_letters(&self) -> FxHashSet<char> {
        self.cells.iter().filter_map(|c| c.letter()).collect()
    }

    /// True if every cell is revealed and spells `word`
    #[must_use]
    pub fn is_solved_by(&self, word: &Word) -> bool {
        self.cells.len() == word.len()
            && self
                .cells
                .iter()
                .zip(word.chars())
                .all(|(&cell, &ch)| cell == Cell::Revealed(ch))
    }

    /// Reveal `letter` at every position it occupies in `word`
    ///
    /// Cells where `word` does not hold `letter` are copied unchanged, so a revealed cell
    /// never goes back to unknown and revealing the same letter twice is a no-op.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{Pattern, Word};
    ///
    /// let word = Word::new("apple").unwrap();
    /// let pattern = Pattern::parse("a____").unwrap();
    ///
    /// let next = pattern.reveal('p', &word);
    /// assert_eq!(next.to_string(), "app__");
    /// assert_eq!(next.reveal('p', &word), next);
    /// ```
    #[must_use]
    pub fn reveal(&self, letter: char, word: &Word) -> Self {
        let mut cells = self.cells.clone();
        for &position in word.positions_of(letter) {
            if let Some(cell) = cells.get_mut(position) {
                *cell = Cell::Revealed(letter);
            }
        }
        Self { cells }
    }
}

impl FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Cell::Revealed(letter) => write!(f, "{letter}")?,
                Cell::Unknown => write!(f, "{UNKNOWN_MARKER}")?,
            }
        }
        Ok(())
    }
}
