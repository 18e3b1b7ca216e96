//! Command implementations

pub mod benchmark;
pub mod query;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use query::{Method, QueryResult, run_query};
pub use solve::{RoundStep, SolveConfig, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, estimate_remaining, print_test_all_statistics, run_test_all};
