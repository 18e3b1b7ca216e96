//! Letter ranking
//!
//! The matcher narrows the corpus to the words consistent with a guess state; the two
//! scorers rank the unguessed letters over those candidates.

pub mod frequency;
pub mod information;
pub mod matcher;
mod score;

pub use information::{InformationConfig, InformationMode, InformationScorer};
pub use score::{LetterScore, Metric};
