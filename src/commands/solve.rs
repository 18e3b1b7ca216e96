//! Self-play on a known word
//!
//! Plays hangman against a target the solver is allowed to see only through reveals:
//! each round takes the top frequency letter over the current candidates, reveals it
//! against the target and records the outcome.

use crate::config::Alphabet;
use crate::core::{GuessState, Pattern, Word};
use crate::corpus::WordCorpus;
use crate::error::Result;
use crate::solver::frequency;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    /// Round cap; `None` means one round per alphabet letter
    pub max_rounds: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: None,
        }
    }

    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub rounds: Vec<RoundStep>,
}

impl SolveResult {
    /// Guesses that revealed nothing
    #[must_use]
    pub fn misses(&self) -> usize {
        self.rounds.iter().filter(|r| !r.hit).count()
    }
}

/// A single round of self-play
#[derive(Debug, Clone)]
pub struct RoundStep {
    pub letter: char,
    /// True if the letter occurs in the target
    pub hit: bool,
    /// Pattern after the reveal
    pub pattern: Pattern,
    /// Candidates that contained the letter when it was chosen
    pub containment: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve `config.target` from an all-unknown pattern
///
/// A letter the target lacks is added to the excluded set, so every round guesses a new
/// letter. The loop ends when the pattern spells the target or the round cap is hit; in
/// the latter case the result has `success == false`.
///
/// # Errors
///
/// Returns an error if the target is not a valid word, if no candidate fits the state
/// (the target is not in the corpus) or if the alphabet runs out.
///
/// # Examples
/// ```
/// use hangman_solver::commands::{SolveConfig, solve_word};
/// use hangman_solver::config::Alphabet;
/// use hangman_solver::corpus::WordCorpus;
///
/// let corpus = WordCorpus::from_words(["cat", "apple"]);
/// let result = solve_word(&corpus, &Alphabet::english(), SolveConfig::new("cat".into())).unwrap();
/// assert!(result.success);
/// assert_eq!(result.rounds.len(), 3);
/// ```
pub fn solve_word(
    corpus: &WordCorpus,
    alphabet: &Alphabet,
    config: SolveConfig,
) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    let max_rounds = config.max_rounds.unwrap_or(alphabet.len());

    let mut state = GuessState::initial(target.len());
    let mut rounds: Vec<RoundStep> = Vec::new();

    while rounds.len() < max_rounds {
        let candidates = corpus.filter(&state);
        let best = frequency::best_letter(&candidates, alphabet, &state)?;
        let letter = best.letter;

        let hit = target.has_letter(letter);
        state = if hit {
            state.with_pattern(state.pattern().reveal(letter, &target))
        } else {
            log::debug!("'{letter}' missed {}", target.text());
            state.with_excluded(letter)
        };

        rounds.push(RoundStep {
            letter,
            hit,
            pattern: state.pattern().clone(),
            containment: best.metric.value() as usize,
            candidates_before: candidates.len(),
            candidates_after: corpus.count_matching(&state),
        });

        if state.pattern().is_solved_by(&target) {
            return Ok(SolveResult {
                target: target.text().to_string(),
                success: true,
                rounds,
            });
        }
    }

    log::info!("Gave up on {} after {max_rounds} rounds", target.text());
    Ok(SolveResult {
        target: target.text().to_string(),
        success: false,
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;

    fn corpus() -> WordCorpus {
        WordCorpus::from_words(["cat", "apple", "apply", "ample", "amble", "banana"])
    }

    #[test]
    fn lone_word_solved_one_round_per_letter() {
        let result = solve_word(
            &corpus(),
            &Alphabet::english(),
            SolveConfig::new("cat".to_string()),
        )
        .unwrap();

        assert!(result.success);
        assert_eq!(result.rounds.len(), 3);
        assert_eq!(result.misses(), 0);
        assert_eq!(result.rounds[2].pattern.to_string(), "cat");
    }

    #[test]
    fn repeated_letters_reveal_together() {
        let result = solve_word(
            &corpus(),
            &Alphabet::english(),
            SolveConfig::new("banana".to_string()),
        )
        .unwrap();

        assert!(result.success);
        // a, b, n
        assert_eq!(result.rounds.len(), 3);
    }

    #[test]
    fn misses_are_excluded_and_never_repeated() {
        let corpus = WordCorpus::from_words(["cat", "cot", "cut"]);
        let result = solve_word(
            &corpus,
            &Alphabet::english(),
            SolveConfig::new("cut".to_string()),
        )
        .unwrap();

        // c, t, then a and o miss before u
        let letters: Vec<char> = result.rounds.iter().map(|r| r.letter).collect();
        assert_eq!(letters, ['c', 't', 'a', 'o', 'u']);
        assert_eq!(result.misses(), 2);
        assert!(!result.rounds[2].hit);
        assert_eq!(result.rounds[2].pattern.to_string(), "c_t");
        assert_eq!(result.rounds[2].candidates_after, 2);
        assert!(result.success);
    }

    #[test]
    fn candidates_never_grow() {
        let result = solve_word(
            &corpus(),
            &Alphabet::english(),
            SolveConfig::new("apply".to_string()),
        )
        .unwrap();

        for round in &result.rounds {
            assert!(round.candidates_after <= round.candidates_before);
            assert!(round.candidates_after >= 1);
        }
    }

    #[test]
    fn round_cap_stops_unsolved() {
        let config = SolveConfig::new("apple".to_string()).with_max_rounds(1);
        let result = solve_word(&corpus(), &Alphabet::english(), config).unwrap();

        assert!(!result.success);
        assert_eq!(result.rounds.len(), 1);
    }

    #[test]
    fn unknown_target_runs_out_of_candidates() {
        let result = solve_word(
            &corpus(),
            &Alphabet::english(),
            SolveConfig::new("zzz".to_string()),
        );
        assert!(matches!(result, Err(SolverError::NoCandidates)));
    }

    #[test]
    fn empty_target_is_invalid() {
        let result = solve_word(
            &corpus(),
            &Alphabet::english(),
            SolveConfig::new("  ".to_string()),
        );
        assert!(matches!(result, Err(SolverError::InvalidWord(_))));
    }
}
