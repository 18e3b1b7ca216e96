//! Benchmark command
//!
//! Self-plays a random sample of the corpus and measures throughput.

use super::solve::{SolveConfig, solve_word};
use crate::config::Alphabet;
use crate::corpus::WordCorpus;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub total_misses: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds taken → number of solved words
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Self-play `count` random words from the corpus
///
/// With a `seed` the sample is reproducible. A word that cannot be solved counts as a
/// failure and does not contribute to the round statistics.
#[must_use]
pub fn run_benchmark(
    corpus: &WordCorpus,
    alphabet: &Alphabet,
    count: usize,
    seed: Option<u64>,
) -> BenchmarkResult {
    match seed {
        Some(seed) => sample_and_run(corpus, alphabet, count, &mut StdRng::seed_from_u64(seed)),
        None => sample_and_run(corpus, alphabet, count, &mut rand::rng()),
    }
}

fn sample_and_run<R: Rng + ?Sized>(
    corpus: &WordCorpus,
    alphabet: &Alphabet,
    count: usize,
    rng: &mut R,
) -> BenchmarkResult {
    let targets: Vec<String> = corpus
        .words()
        .choose_multiple(rng, count)
        .map(|w| w.text().to_string())
        .collect();

    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut total_misses = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in &targets {
        match solve_word(corpus, alphabet, SolveConfig::new(target.clone())) {
            Ok(result) if result.success => {
                let rounds = result.rounds.len();
                solved += 1;
                total_rounds += rounds;
                total_misses += result.misses();
                min_rounds = min_rounds.min(rounds);
                max_rounds = max_rounds.max(rounds);
                *distribution.entry(rounds).or_insert(0) += 1;
            }
            Ok(_) => log::warn!("Round cap reached for {target}"),
            Err(e) => log::warn!("Could not solve {target}: {e}"),
        }
    }

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_rounds,
        total_misses,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
