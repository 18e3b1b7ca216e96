//! Guess state: the revealed pattern plus the letters known to be absent

use super::Pattern;
use crate::error::{Result, SolverError};
use rustc_hash::FxHashSet;
use std::fmt;

/// Letters confirmed absent from the hidden word, in the order they were guessed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedSet {
    letters: Vec<char>,
}

impl ExcludedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-delimited letter list such as `"x, q,z"`
    ///
    /// The empty string is the empty set. Entries are trimmed and lowercased, and empty
    /// entries are skipped.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidLetter` if an entry is longer than one letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::ExcludedSet;
    ///
    /// let excluded = ExcludedSet::parse("x, Q,,z").unwrap();
    /// assert_eq!(excluded.letters(), &['x', 'q', 'z']);
    /// assert!(ExcludedSet::parse("").unwrap().is_empty());
    /// assert!(ExcludedSet::parse("ab").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut excluded = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let mut letters = entry.chars().flat_map(char::to_lowercase);
            match (letters.next(), letters.next()) {
                (Some(letter), None) => {
                    excluded.insert(letter);
                }
                _ => return Err(SolverError::InvalidLetter(entry.to_string())),
            }
        }
        Ok(excluded)
    }

    /// Add a letter, returning false if it was already present
    pub fn insert(&mut self, letter: char) -> bool {
        if self.letters.contains(&letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl FromIterator<char> for ExcludedSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut excluded = Self::new();
        for letter in iter {
            excluded.insert(letter);
        }
        excluded
    }
}

impl fmt::Display for ExcludedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Everything known about the hidden word: the sole input of a scoring query
///
/// Revealed and excluded letters never overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessState {
    pattern: Pattern,
    excluded: ExcludedSet,
    revealed: FxHashSet<char>,
}

impl GuessState {
    /// Combine a pattern and an excluded set
    ///
    /// # Errors
    /// Returns `SolverError::ConflictingLetter` if a letter is both revealed and excluded.
    pub fn new(pattern: Pattern, excluded: ExcludedSet) -> Result<Self> {
        let revealed = pattern.revealed_letters();
        if let Some(letter) = excluded.iter().find(|l| revealed.contains(l)) {
            return Err(SolverError::ConflictingLetter(letter));
        }

        Ok(Self {
            pattern,
            excluded,
            revealed,
        })
    }

    /// Parse the query encoding: a pattern string and a comma-delimited excluded list
    ///
    /// # Errors
    /// Returns an error if either part fails to parse or they share a letter.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::GuessState;
    ///
    /// let state = GuessState::parse("a__le", "x,z").unwrap();
    /// assert_eq!(state.pattern().len(), 5);
    /// assert!(state.is_guessed('a'));
    /// assert!(state.is_guessed('x'));
    /// assert!(!state.is_guessed('p'));
    ///
    /// assert!(GuessState::parse("a__le", "a").is_err());
    /// ```
    pub fn parse(pattern: &str, excluded: &str) -> Result<Self> {
        Self::new(Pattern::parse(pattern)?, ExcludedSet::parse(excluded)?)
    }

    /// All-unknown pattern of `len` cells with nothing excluded
    #[must_use]
    pub fn initial(len: usize) -> Self {
        Self {
            pattern: Pattern::unknown(len),
            excluded: ExcludedSet::new(),
            revealed: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> &ExcludedSet {
        &self.excluded
    }

    /// Distinct letters revealed in the pattern
    #[inline]
    #[must_use]
    pub const fn revealed_letters(&self) -> &FxHashSet<char> {
        &self.revealed
    }

    /// True if the letter is revealed or excluded
    #[inline]
    #[must_use]
    pub fn is_guessed(&self, letter: char) -> bool {
        self.revealed.contains(&letter) || self.excluded.contains(letter)
    }

    /// Same excluded set with a new pattern, for a reveal of an unguessed letter
    #[must_use]
    pub fn with_pattern(&self, pattern: Pattern) -> Self {
        let revealed = pattern.revealed_letters();
        let mut excluded = self.excluded.clone();
        excluded.letters.retain(|l| !revealed.contains(l));
        Self {
            pattern,
            excluded,
            revealed,
        }
    }

    /// Same pattern with one more excluded letter, for a missed guess
    #[must_use]
    pub fn with_excluded(&self, letter: char) -> Self {
        let mut next = self.clone();
        if !next.revealed.contains(&letter) {
            next.excluded.insert(letter);
        }
        next
    }
}
