//! Test all words - self-play across the whole corpus
//!
//! Runs the frequency solver against every word and reports round statistics.

use super::solve::{SolveConfig, solve_word};
use crate::config::Alphabet;
use crate::corpus::WordCorpus;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Rounds taken → number of solved words
    pub round_distribution: BTreeMap<usize, usize>,
    pub total_misses: usize,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    /// Words needing the most rounds, worst first
    pub worst_words: Vec<(String, usize)>,
    pub failed_words: Vec<String>,
}

/// Time left for `total - done` words at the average rate so far
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use hangman_solver::commands::estimate_remaining;
///
/// let left = estimate_remaining(Duration::from_secs(8), 4, 10);
/// assert_eq!(left, Duration::from_secs(12));
/// ```
#[must_use]
pub fn estimate_remaining(elapsed: Duration, done: usize, total: usize) -> Duration {
    if done == 0 {
        return Duration::ZERO;
    }
    let per_word = elapsed.as_secs_f64() / done as f64;
    Duration::from_secs_f64(per_word * total.saturating_sub(done) as f64)
}

/// Self-play every corpus word (or the first `limit` of them)
#[must_use]
pub fn run_test_all(
    corpus: &WordCorpus,
    alphabet: &Alphabet,
    limit: Option<usize>,
) -> TestAllStatistics {
    let total = limit.map_or(corpus.len(), |l| l.min(corpus.len()));

    println!("🎯 Testing {total} words...");

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut round_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut results: Vec<(String, usize)> = Vec::with_capacity(total);
    let mut failed_words = Vec::new();
    let mut total_misses = 0;

    let total_start = Instant::now();

    for (idx, word) in corpus.words().iter().take(total).enumerate() {
        match solve_word(corpus, alphabet, SolveConfig::new(word.text().to_string())) {
            Ok(result) if result.success => {
                let rounds = result.rounds.len();
                total_misses += result.misses();
                *round_distribution.entry(rounds).or_insert(0) += 1;
                results.push((result.target, rounds));
            }
            Ok(result) => failed_words.push(result.target),
            Err(e) => {
                log::warn!("Could not solve {}: {e}", word.text());
                failed_words.push(word.text().to_string());
            }
        }

        let done = idx + 1;
        if done % 10 == 0 && !results.is_empty() {
            let avg = results.iter().map(|(_, r)| r).sum::<usize>() as f64 / results.len() as f64;
            let left = estimate_remaining(total_start.elapsed(), done, total);
            pb.set_message(format!("Avg: {avg:.2} | ~{:.0}s left", left.as_secs_f64()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();
    let solved = results.len();

    let average_rounds = if solved > 0 {
        results.iter().map(|(_, r)| r).sum::<usize>() as f64 / solved as f64
    } else {
        0.0
    };
    let max_rounds = results.iter().map(|(_, r)| *r).max().unwrap_or(0);
    let min_rounds = results.iter().map(|(_, r)| *r).min().unwrap_or(0);

    let mut worst_words = results;
    worst_words.sort_by_key(|(_, rounds)| std::cmp::Reverse(*rounds));
    worst_words.truncate(10);

    TestAllStatistics {
        total_words: total,
        solved,
        failed: failed_words.len(),
        round_distribution,
        total_misses,
        total_time,
        average_rounds,
        max_rounds,
        min_rounds,
        worst_words,
        failed_words,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    if stats.total_words == 0 {
        return;
    }
    println!(
        "  Successfully solved: {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:     {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average rounds:      {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Misses per word:     {:.2}",
        stats.total_misses as f64 / stats.solved.max(1) as f64
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );

    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.round_distribution.values().copied().max().unwrap_or(1);
    for (rounds, &count) in &stats.round_distribution {
        let percentage = count as f64 / stats.solved as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {rounds:2} rounds: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, rounds) in stats.worst_words.iter().take(5) {
            println!("  {} ({rounds} rounds)", word.to_uppercase().yellow());
        }
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved".red().bold());
        for word in stats.failed_words.iter().take(10) {
            println!("  {}", word.to_uppercase().red());
        }
    }
}
