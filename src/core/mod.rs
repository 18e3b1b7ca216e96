//! Core domain types for hangman
//!
//! Words, patterns and guess states. Everything here is pure and cheap to clone.

mod pattern;
mod state;
mod word;

pub use pattern::{Cell, Pattern, UNKNOWN_MARKER};
pub use state::{ExcludedSet, GuessState};
pub use word::{Word, WordError};
