//! Display functions for command results

use super::formatters::{containment_percent, create_progress_bar, hit_marker, spaced_pattern};
use crate::commands::{BenchmarkResult, Method, QueryResult, SolveResult};
use crate::corpus::WordCorpus;
use crate::solver::Metric;
use colored::Colorize;

/// Candidate lists longer than this are summarized by their size
const MAX_LISTED_CANDIDATES: usize = 10;

/// Print the candidates and the top `top` letters of a query
pub fn print_query_result(result: &QueryResult, top: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Pattern: {}   Excluded: {}",
        spaced_pattern(result.state.pattern()).bright_yellow().bold(),
        if result.state.excluded().is_empty() {
            "-".to_string()
        } else {
            result.state.excluded().to_string()
        }
    );
    println!("{}", "─".repeat(60).cyan());

    let total = result.candidates.len();
    if total <= MAX_LISTED_CANDIDATES {
        println!("\n📋 {} candidates: {}", total, result.candidates.join(", "));
    } else {
        println!("\n📋 {total} candidates");
    }

    println!(
        "\n📊 {} ({})",
        "Best letters".bright_cyan().bold(),
        result.method
    );
    let max = result.scores.first().map_or(0.0, |s| s.metric.value());
    for (rank, score) in result.scores.iter().take(top).enumerate() {
        let bar = create_progress_bar(score.metric.value(), max, 20);
        let letter = score.letter.to_uppercase().to_string();
        match (result.method, score.metric) {
            (Method::Frequency, Metric::Count(count)) => println!(
                "  {}. {} [{}] {count:6} {:6.1}%",
                rank + 1,
                letter.bright_green().bold(),
                bar.green(),
                containment_percent(count, total)
            ),
            (_, metric) => println!(
                "  {}. {} [{}] {metric}",
                rank + 1,
                letter.bright_green().bold(),
                bar.green()
            ),
        }
    }

    if let Some(best) = result.best() {
        println!(
            "\n{} {}",
            "Guess next:".bold(),
            best.letter.to_uppercase().to_string().bright_yellow().bold()
        );
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {:5} {}",
            i + 1,
            step.letter.to_uppercase(),
            hit_marker(step.hit),
            spaced_pattern(&step.pattern)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Contained in {} ({:.1}%)",
                step.containment,
                containment_percent(step.containment, step.candidates_before)
            );
            if step.candidates_after > 0 {
                let ratio = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({ratio:.1}x reduction)",
                    ratio.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!(
                "✅ Solved in {} rounds ({} misses)",
                result.rounds.len(),
                result.misses()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Misses per word:  {:.2}",
        result.total_misses as f64 / result.solved.max(1) as f64
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<(usize, usize)> = result.distribution.iter().map(|(&r, &n)| (r, n)).collect();
    rounds.sort_unstable();
    for (round_count, count) in rounds {
        let pct = count as f64 / result.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {round_count:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print the word length histogram of a corpus
pub fn print_corpus_stats(corpus: &WordCorpus) {
    println!("\n📚 {} words", corpus.len());
    let lengths = corpus.lengths();
    let max = lengths.first().map_or(0, |&(_, count)| count);
    for (len, count) in lengths {
        let bar = create_progress_bar(count as f64, max as f64, 30);
        println!("  {len:3} letters: {} {count}", bar.cyan());
    }
}
