//! Hangman Solver
//!
//! A hangman solver that ranks the next letter to guess by containment frequency or by
//! expected information, computed by treating every remaining candidate as the solution.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::config::Alphabet;
//! use hangman_solver::core::GuessState;
//! use hangman_solver::corpus::WordCorpus;
//! use hangman_solver::solver::frequency;
//!
//! let corpus = WordCorpus::from_words(["apple", "apply", "ample"]);
//! let state = GuessState::parse("a____", "").unwrap();
//!
//! let candidates = corpus.filter(&state);
//! let best = frequency::best_letter(&candidates, &Alphabet::english(), &state).unwrap();
//! println!("Next letter: {}", best.letter);
//! ```

// Alphabet and language configuration
pub mod config;

// Error types
pub mod error;

// Core domain types
pub mod core;

// Word corpus loading
pub mod corpus;

// Scoring algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting and the visualizer handoff file
pub mod output;

pub use error::{Result, SolverError};
