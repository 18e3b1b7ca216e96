//! Error types shared by the solver

use crate::core::WordError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by corpus loading, query parsing and scoring
#[derive(Debug, Error)]
pub enum SolverError {
    /// The wordlist could not be read
    #[error("failed to read wordlist {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A best letter was requested but no candidate word matches the guess state
    #[error("no candidate words remain")]
    NoCandidates,

    /// Every letter of the alphabet has already been guessed
    #[error("every letter of the alphabet has already been guessed")]
    AlphabetExhausted,

    /// A hypothetical reveal left no word standing, so the candidates did not match the state
    #[error("hypothesis '{word}' with letter '{letter}' matched no words")]
    EmptyHypothesis { word: String, letter: char },

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("invalid excluded letter '{0}'")]
    InvalidLetter(String),

    /// A letter was given as both revealed and excluded
    #[error("letter '{0}' is both revealed and excluded")]
    ConflictingLetter(char),

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to write handoff file {}: {source}", path.display())]
    Handoff {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize scores: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SolverError>;
