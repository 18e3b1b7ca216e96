//! Containment-frequency letter ranking
//!
//! Ranks each unguessed letter by how many candidates contain it. A word counts once
//! per letter however often the letter repeats in it.

use super::score::LetterScore;
use crate::config::Alphabet;
use crate::core::{GuessState, Word};
use crate::error::{Result, SolverError};

/// Rank unguessed letters by containment count
///
/// Letters already revealed or excluded in `state` are skipped; letters no candidate
/// contains are kept with a count of zero. The sort is stable, so equal counts keep
/// alphabet order.
///
/// # Examples
/// ```
/// use hangman_solver::config::Alphabet;
/// use hangman_solver::core::{GuessState, Word};
/// use hangman_solver::solver::frequency::score;
/// use hangman_solver::solver::Metric;
///
/// let words = [Word::new("apple").unwrap(), Word::new("ample").unwrap()];
/// let candidates: Vec<&Word> = words.iter().collect();
/// let state = GuessState::parse("a____", "").unwrap();
///
/// let ranked = score(&candidates, &Alphabet::english(), &state);
/// assert_eq!(ranked[0].letter, 'e');
/// assert_eq!(ranked[0].metric, Metric::Count(2));
/// ```
#[must_use]
pub fn score(candidates: &[&Word], alphabet: &Alphabet, state: &GuessState) -> Vec<LetterScore> {
    let mut counts: Vec<(char, usize)> = alphabet
        .letters()
        .iter()
        .filter(|&&letter| !state.is_guessed(letter))
        .map(|&letter| {
            let count = candidates.iter().filter(|w| w.has_letter(letter)).count();
            (letter, count)
        })
        .collect();

    counts.sort_by_key(|&(_, count)| std::cmp::Reverse(count));
    counts
        .into_iter()
        .map(|(letter, count)| LetterScore::count(letter, count))
        .collect()
}

/// The single best letter to guess next
///
/// # Errors
///
/// Returns `SolverError::NoCandidates` if `candidates` is empty and
/// `SolverError::AlphabetExhausted` if every letter has been guessed.
pub fn best_letter(
    candidates: &[&Word],
    alphabet: &Alphabet,
    state: &GuessState,
) -> Result<LetterScore> {
    if candidates.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    score(candidates, alphabet, state)
        .into_iter()
        .next()
        .ok_or(SolverError::AlphabetExhausted)
}
