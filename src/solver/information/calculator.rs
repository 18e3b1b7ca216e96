//! Per-hypothesis information calculation
//!
//! Treats one candidate as the hidden word and measures, for every unguessed letter,
//! how far guessing that letter would shrink the candidate set.

use super::InformationMode;
use crate::core::{GuessState, Word};
use crate::error::{Result, SolverError};
use crate::solver::matcher;

/// Information gained when `before` candidates narrow down to `after`
///
/// `log2(before / after)`: halving the candidates is one bit.
///
/// # Examples
/// ```
/// use hangman_solver::solver::information::information_bits;
///
/// assert!((information_bits(8, 2) - 2.0).abs() < 1e-9);
/// assert!(information_bits(5, 5).abs() < 1e-9);
/// ```
#[must_use]
pub fn information_bits(before: usize, after: usize) -> f64 {
    (before as f64 / after as f64).log2()
}

/// Bits gained for each letter if `hypothesis` were the hidden word
///
/// One `(letter, bits)` pair is returned per letter in `letters`, in that order.
/// A letter present in the hypothesis is revealed at all of its positions and the
/// candidates are re-filtered against the resulting pattern. A letter absent from the
/// hypothesis scores zero in [`InformationMode::PresentOnly`]; in
/// [`InformationMode::BothBranches`] it is excluded and the candidates re-filtered.
///
/// # Errors
///
/// Returns `SolverError::EmptyHypothesis` if a hypothetical state matches no candidate,
/// which happens only when `candidates` are inconsistent with `state`.
pub fn hypothesis_information(
    hypothesis: &Word,
    candidates: &[&Word],
    state: &GuessState,
    letters: &[char],
    mode: InformationMode,
) -> Result<Vec<(char, f64)>> {
    let total = candidates.len();

    letters
        .iter()
        .map(|&letter| {
            let hypothetical = if hypothesis.has_letter(letter) {
                state.with_pattern(state.pattern().reveal(letter, hypothesis))
            } else {
                match mode {
                    InformationMode::PresentOnly => return Ok((letter, 0.0)),
                    InformationMode::BothBranches => state.with_excluded(letter),
                }
            };

            let remaining = matcher::count_matching(candidates.iter().copied(), &hypothetical);
            if remaining == 0 {
                return Err(SolverError::EmptyHypothesis {
                    word: hypothesis.text().to_string(),
                    letter,
                });
            }

            Ok((letter, information_bits(total, remaining)))
        })
        .collect()
}
