//! Candidate filtering
//!
//! A word is a candidate for a guess state when it could still be the hidden word:
//! same length, no excluded letter, every revealed cell matches, and no unknown cell
//! holds a letter that is revealed elsewhere. Hangman reveals a letter at all of its
//! positions at once, so a word hiding a revealed letter behind an unknown cell is
//! inconsistent.

use crate::core::{Cell, GuessState, Word};

/// Check a single word against the guess state
///
/// # Examples
/// ```
/// use hangman_solver::core::{GuessState, Word};
/// use hangman_solver::solver::matcher::is_consistent;
///
/// let state = GuessState::parse("a___e", "").unwrap();
/// assert!(is_consistent(&Word::new("apple").unwrap(), &state));
/// // The trailing 'a' would already be revealed
/// assert!(!is_consistent(&Word::new("aroma").unwrap(), &state));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, state: &GuessState) -> bool {
    let pattern = state.pattern();

    if word.len() != pattern.len() {
        return false;
    }

    if state.excluded().iter().any(|letter| word.has_letter(letter)) {
        return false;
    }

    let revealed = state.revealed_letters();
    pattern
        .cells()
        .iter()
        .zip(word.chars())
        .all(|(&cell, ch)| match cell {
            Cell::Revealed(letter) => *ch == letter,
            Cell::Unknown => !revealed.contains(ch),
        })
}

/// Filter words to those consistent with the guess state
///
/// Candidates keep their input order.
pub fn filter<'a, I>(words: I, state: &GuessState) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| is_consistent(word, state))
        .collect()
}

/// Count the words consistent with the guess state without collecting them
pub fn count_matching<'a, I>(words: I, state: &GuessState) -> usize
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| is_consistent(word, state))
        .count()
}
