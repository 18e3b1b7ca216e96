//! Expected-information letter ranking
//!
//! Every candidate is taken in turn as the hidden word. For each unguessed letter the
//! candidate set is re-filtered as if that letter had just been revealed, giving
//! `log2(before / after)` bits. A letter's score is the mean over all candidates.
//!
//! The hypotheses are independent, so they run on a fixed-size worker pool, one task per
//! candidate. Tasks only read the shared candidates and state; the orchestrator waits
//! for every task, concatenates their `(letter, bits)` lists and averages per letter.

mod calculator;

pub use calculator::{hypothesis_information, information_bits};

use super::score::LetterScore;
use crate::config::Alphabet;
use crate::core::{GuessState, Word};
use crate::error::{Result, SolverError};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Instant;

/// How a hypothesis that lacks the guessed letter is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InformationMode {
    /// A miss is worth zero bits
    #[default]
    PresentOnly,
    /// A miss excludes the letter and is scored like a hit, giving the entropy of the
    /// reveal outcome
    BothBranches,
}

impl FromStr for InformationMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "present" | "present-only" => Ok(Self::PresentOnly),
            "both" | "both-branches" | "entropy" => Ok(Self::BothBranches),
            other => Err(format!("Unknown information mode: {other}")),
        }
    }
}

impl fmt::Display for InformationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PresentOnly => write!(f, "present-only"),
            Self::BothBranches => write!(f, "both-branches"),
        }
    }
}

/// Settings for the information scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InformationConfig {
    pub mode: InformationMode,
    /// Worker threads in the pool
    pub threads: usize,
}

impl InformationConfig {
    #[must_use]
    pub const fn with_mode(mut self, mode: InformationMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for InformationConfig {
    /// Present-only scoring with one worker per available processor
    fn default() -> Self {
        Self {
            mode: InformationMode::default(),
            threads: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

/// Ranks letters by average expected information on a dedicated worker pool
pub struct InformationScorer {
    alphabet: Alphabet,
    mode: InformationMode,
    pool: rayon::ThreadPool,
}

impl InformationScorer {
    /// Create a scorer and its worker pool
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Pool` if the worker threads cannot be spawned.
    pub fn new(alphabet: Alphabet, config: InformationConfig) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads.max(1))
            .thread_name(|i| format!("information-worker-{i}"))
            .build()?;

        Ok(Self {
            alphabet,
            mode: config.mode,
            pool,
        })
    }

    /// Number of worker threads in the pool
    #[must_use]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    #[must_use]
    pub const fn mode(&self) -> InformationMode {
        self.mode
    }

    /// Rank unguessed letters by average information over all candidates
    ///
    /// Candidates lacking a letter contribute zero bits to its mean in
    /// [`InformationMode::PresentOnly`]. Scores are sorted descending; equal scores keep
    /// alphabet order.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::NoCandidates` for an empty candidate set. If any worker task
    /// fails, the remaining tasks are abandoned and that task's error is returned.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::config::Alphabet;
    /// use hangman_solver::core::GuessState;
    /// use hangman_solver::corpus::WordCorpus;
    /// use hangman_solver::solver::information::{InformationConfig, InformationScorer};
    ///
    /// let corpus = WordCorpus::from_words(["apple", "apply", "ample"]);
    /// let state = GuessState::parse("a____", "").unwrap();
    /// let candidates = corpus.filter(&state);
    ///
    /// let scorer = InformationScorer::new(Alphabet::english(), InformationConfig::default()).unwrap();
    /// let ranked = scorer.score(&candidates, &state).unwrap();
    /// assert_eq!(ranked.len(), 25);
    /// assert!(ranked[0].metric.value() > 0.0);
    /// ```
    pub fn score(&self, candidates: &[&Word], state: &GuessState) -> Result<Vec<LetterScore>> {
        if candidates.is_empty() {
            return Err(SolverError::NoCandidates);
        }

        let letters: Vec<char> = self
            .alphabet
            .letters()
            .iter()
            .copied()
            .filter(|&letter| !state.is_guessed(letter))
            .collect();

        let start = Instant::now();
        log::debug!(
            "Scoring {} letters over {} candidates on {} workers",
            letters.len(),
            candidates.len(),
            self.threads()
        );

        // Indexed collect keeps candidate order, so the sums below are reproducible
        let partials: Vec<Vec<(char, f64)>> = self.pool.install(|| {
            candidates
                .par_iter()
                .map(|&hypothesis| {
                    hypothesis_information(hypothesis, candidates, state, &letters, self.mode)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let information: Vec<(char, f64)> = partials.into_iter().flatten().collect();
        let scores = average_by_letter(&letters, &information);

        log::info!(
            "Information scoring took {:.3}s",
            start.elapsed().as_secs_f64()
        );
        Ok(scores)
    }
}

/// Mean bits per letter, sorted descending
///
/// Letters are visited in `letters` order and the sort is stable.
fn average_by_letter(letters: &[char], information: &[(char, f64)]) -> Vec<LetterScore> {
    let mut totals: FxHashMap<char, (f64, usize)> = FxHashMap::default();
    for &(letter, bits) in information {
        let entry = totals.entry(letter).or_insert((0.0, 0));
        entry.0 += bits;
        entry.1 += 1;
    }

    let mut scores: Vec<LetterScore> = letters
        .iter()
        .filter_map(|&letter| {
            totals
                .get(&letter)
                .map(|&(sum, count)| LetterScore::bits(letter, sum / count as f64))
        })
        .collect();

    scores.sort_by(|a, b| b.metric.value().total_cmp(&a.metric.value()));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::words_from_slice;

    fn scorer(threads: usize, mode: InformationMode) -> InformationScorer {
        let config = InformationConfig::default()
            .with_threads(threads)
            .with_mode(mode);
        InformationScorer::new(Alphabet::english(), config).unwrap()
    }

    fn bits_of(scores: &[LetterScore], letter: char) -> f64 {
        scores
            .iter()
            .find(|s| s.letter == letter)
            .map(|s| s.metric.value())
            .unwrap()
    }

    #[test]
    fn single_candidate_yields_zero_information() {
        let words = words_from_slice(&["cat"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let state = GuessState::initial(3);

        for mode in [InformationMode::PresentOnly, InformationMode::BothBranches] {
            let scores = scorer(2, mode).score(&candidates, &state).unwrap();
            assert_eq!(scores.len(), 26);
            assert!(scores.iter().all(|s| s.metric.value() == 0.0));
        }
    }

    #[test]
    fn mean_includes_zero_contributions() {
        let words = words_from_slice(&["apple", "apply", "ample"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let state = GuessState::parse("a____", "").unwrap();

        let scores = scorer(2, InformationMode::PresentOnly)
            .score(&candidates, &state)
            .unwrap();

        // 'y' identifies "apply" (log2 3 bits) and scores 0 for the other two
        assert!((bits_of(&scores, 'y') - 3f64.log2() / 3.0).abs() < 1e-9);
        // 'm' identifies "ample" the same way
        assert!((bits_of(&scores, 'm') - 3f64.log2() / 3.0).abs() < 1e-9);
        // every candidate has 'l' at position 3, so it tells nothing
        assert!(bits_of(&scores, 'l').abs() < 1e-9);
    }

    #[test]
    fn scores_sorted_descending_with_alphabet_tie_break() {
        let words = words_from_slice(&["apple", "apply", "ample"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let state = GuessState::parse("a____", "").unwrap();

        let scores = scorer(3, InformationMode::PresentOnly)
            .score(&candidates, &state)
            .unwrap();

        let values: Vec<f64> = scores.iter().map(|s| s.metric.value()).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));

        // 'm' and 'y' tie, so 'm' comes first
        let m = scores.iter().position(|s| s.letter == 'm').unwrap();
        let y = scores.iter().position(|s| s.letter == 'y').unwrap();
        assert!(m < y);
    }

    #[test]
    fn results_do_not_depend_on_pool_size() {
        let words = words_from_slice(&[
            "banana", "bandit", "cabana", "canine", "bikini", "damned", "kitten", "mitten",
        ]);
        let candidates: Vec<&Word> = words.iter().collect();
        let state = GuessState::initial(6);

        let single = scorer(1, InformationMode::PresentOnly)
            .score(&candidates, &state)
            .unwrap();
        let parallel = scorer(4, InformationMode::PresentOnly)
            .score(&candidates, &state)
            .unwrap();

        assert_eq!(single, parallel);
    }

    #[test]
    fn both_branches_never_scores_lower() {
        let words = words_from_slice(&["apple", "apply", "ample", "amble", "addle"]);
        let candidates: Vec<&Word> = words.iter().collect();
        let state = GuessState::parse("a____", "").unwrap();

        let present = scorer(2, InformationMode::PresentOnly)
            .score(&candidates, &state)
            .unwrap();
        let both = scorer(2, InformationMode::BothBranches)
            .score(&candidates, &state)
            .unwrap();

        for score in &present {
            assert!(bits_of(&both, score.letter) >= score.metric.value() - 1e-12);
        }

        // 'p' outcomes: "app__" {apple, apply}, "a_p__" {ample}, absent {amble, addle}
        let p = 0.8 * 2.5f64.log2() + 0.2 * 5f64.log2();
        assert!((bits_of(&both, 'p') - p).abs() < 1e-9);
    }

    #[test]
    fn empty_candidates_is_no_candidates() {
        let state = GuessState::initial(5);
        let result = scorer(1, InformationMode::PresentOnly).score(&[], &state);
        assert!(matches!(result, Err(SolverError::NoCandidates)));
    }

    #[test]
    fn worker_failure_fails_whole_query() {
        let words = words_from_slice(&["cat", "dog", "cot"]);
        let candidates: Vec<&Word> = words.iter().collect();
        // "dog" does not fit "c__"; its hypothesis matches nothing
        let state = GuessState::parse("c__", "").unwrap();

        let result = scorer(2, InformationMode::PresentOnly).score(&candidates, &state);
        assert!(matches!(result, Err(SolverError::EmptyHypothesis { .. })));
    }

    #[test]
    fn pool_uses_requested_threads() {
        assert_eq!(scorer(3, InformationMode::PresentOnly).threads(), 3);
        assert_eq!(scorer(0, InformationMode::PresentOnly).threads(), 1);
    }

    #[test]
    fn mode_parses_from_str() {
        assert_eq!(
            "entropy".parse::<InformationMode>(),
            Ok(InformationMode::BothBranches)
        );
        assert_eq!(
            "present-only".parse::<InformationMode>(),
            Ok(InformationMode::PresentOnly)
        );
        assert!("bogus".parse::<InformationMode>().is_err());
    }
}
