//! Letter query command
//!
//! Filters the corpus against a guess state and ranks the unguessed letters.

use crate::config::Alphabet;
use crate::core::GuessState;
use crate::corpus::WordCorpus;
use crate::error::{Result, SolverError};
use crate::solver::{InformationConfig, InformationMode, InformationScorer, LetterScore, frequency};
use std::fmt;
use std::str::FromStr;

/// Letter ranking method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Containment count over the candidates
    Frequency,
    /// Average information over the candidates
    Information(InformationMode),
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frequency" | "freq" | "1" => Ok(Self::Frequency),
            "information" | "info" | "2" => Ok(Self::Information(InformationMode::PresentOnly)),
            "entropy" | "two-branch" => Ok(Self::Information(InformationMode::BothBranches)),
            other => Err(format!(
                "Unknown method: {other}. Use 'frequency', 'information' or 'entropy'"
            )),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Information(InformationMode::PresentOnly) => write!(f, "information"),
            Self::Information(InformationMode::BothBranches) => write!(f, "entropy"),
        }
    }
}

/// Outcome of a letter query
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub method: Method,
    pub state: GuessState,
    /// Candidate words in corpus order
    pub candidates: Vec<String>,
    /// Unguessed letters, best first
    pub scores: Vec<LetterScore>,
}

impl QueryResult {
    /// The recommended next letter
    #[must_use]
    pub fn best(&self) -> Option<LetterScore> {
        self.scores.first().copied()
    }
}

/// Rank the unguessed letters for `state`
///
/// `threads` sizes the worker pool of the information methods and is ignored by the
/// frequency method.
///
/// # Errors
///
/// Returns `SolverError::NoCandidates` if no corpus word fits the state, and any error
/// raised while building the pool or scoring.
pub fn run_query(
    corpus: &WordCorpus,
    alphabet: &Alphabet,
    state: GuessState,
    method: Method,
    threads: usize,
) -> Result<QueryResult> {
    let candidates = corpus.filter(&state);
    log::debug!("{} candidates match {}", candidates.len(), state.pattern());

    if candidates.is_empty() {
        return Err(SolverError::NoCandidates);
    }

    let scores = match method {
        Method::Frequency => frequency::score(&candidates, alphabet, &state),
        Method::Information(mode) => {
            let config = InformationConfig::default()
                .with_mode(mode)
                .with_threads(threads);
            InformationScorer::new(alphabet.clone(), config)?.score(&candidates, &state)?
        }
    };

    Ok(QueryResult {
        method,
        candidates: candidates.iter().map(|w| w.text().to_string()).collect(),
        state,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Metric;

    fn corpus() -> WordCorpus {
        WordCorpus::from_words(["apple", "apply", "ample", "cat", "amble"])
    }

    #[test]
    fn frequency_query_lists_candidates_and_scores() {
        let state = GuessState::parse("a___e", "").unwrap();
        let result = run_query(&corpus(), &Alphabet::english(), state, Method::Frequency, 1).unwrap();

        assert_eq!(result.candidates, ["apple", "ample", "amble"]);
        assert_eq!(result.best(), Some(LetterScore::count('l', 3)));
    }

    #[test]
    fn information_query_ranks_in_bits() {
        let state = GuessState::parse("a____", "").unwrap();
        let method = Method::Information(InformationMode::PresentOnly);
        let result = run_query(&corpus(), &Alphabet::english(), state, method, 2).unwrap();

        assert_eq!(result.scores.len(), 25);
        assert!(matches!(result.scores[0].metric, Metric::Bits(_)));
    }

    #[test]
    fn excluding_an_absent_letter_changes_nothing() {
        let plain = GuessState::parse("_____", "").unwrap();
        let excluded = GuessState::parse("_____", "x").unwrap();

        let a = run_query(&corpus(), &Alphabet::english(), plain, Method::Frequency, 1).unwrap();
        let b = run_query(&corpus(), &Alphabet::english(), excluded, Method::Frequency, 1).unwrap();

        assert_eq!(a.candidates, b.candidates);
        let without_x: Vec<LetterScore> =
            a.scores.into_iter().filter(|s| s.letter != 'x').collect();
        assert_eq!(without_x, b.scores);
    }

    #[test]
    fn no_match_is_no_candidates_for_both_methods() {
        for method in [
            Method::Frequency,
            Method::Information(InformationMode::PresentOnly),
        ] {
            let state = GuessState::parse("zz__", "").unwrap();
            let result = run_query(&corpus(), &Alphabet::english(), state, method, 1);
            assert!(matches!(result, Err(SolverError::NoCandidates)));
        }
    }

    #[test]
    fn method_parsing() {
        assert_eq!("freq".parse::<Method>(), Ok(Method::Frequency));
        assert_eq!(
            "2".parse::<Method>(),
            Ok(Method::Information(InformationMode::PresentOnly))
        );
        assert_eq!(
            "Entropy".parse::<Method>(),
            Ok(Method::Information(InformationMode::BothBranches))
        );
        assert!("minimax".parse::<Method>().is_err());
    }
}
