//! Terminal output formatting
//!
//! Display utilities for CLI results and the score handoff file.

pub mod display;
pub mod formatters;
pub mod handoff;

pub use display::{
    print_benchmark_result, print_corpus_stats, print_query_result, print_solve_result,
};
pub use handoff::{read_handoff, write_handoff};
