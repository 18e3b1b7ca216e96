//! Hangman Solver - CLI
//!
//! Ranks the next letter to guess for a hangman pattern, and self-plays the corpus to
//! measure how well the frequency heuristic does.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use hangman_solver::{
    commands::{
        Method, SolveConfig, print_test_all_statistics, run_benchmark, run_query, run_test_all,
        solve_word,
    },
    config::{Alphabet, Language},
    core::GuessState,
    corpus::WordCorpus,
    output::{
        print_benchmark_result, print_corpus_stats, print_query_result, print_solve_result,
        write_handoff,
    },
    solver::InformationConfig,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman solver ranking letters by containment frequency or expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Language: 'en' (default) or 'de'
    #[arg(short, long, global = true, default_value = "en")]
    language: Language,

    /// Wordlist file (default: the language's bundled list under Wordlists/)
    #[arg(short, long, global = true)]
    wordlist: Option<PathBuf>,

    /// Worker threads for information scoring (default: available processors)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the next letter for a pattern such as a__le
    Query {
        /// Pattern with '_' for unknown letters
        pattern: String,

        /// Letters known to be absent, comma separated
        #[arg(short = 'x', long, default_value = "")]
        excluded: String,

        /// Method: frequency (default), information, entropy
        #[arg(short, long, default_value = "frequency")]
        method: Method,

        /// Number of letters to show
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,

        /// Also write the top letters as JSON to this file
        #[arg(long)]
        handoff: Option<PathBuf>,
    },

    /// Self-play a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Self-play every word in the corpus
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Self-play a random sample of the corpus
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the word length histogram of the corpus
    Corpus,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let alphabet = cli.language.alphabet();
    let path = cli
        .wordlist
        .unwrap_or_else(|| PathBuf::from(cli.language.default_wordlist()));
    let corpus = WordCorpus::load(&path)
        .with_context(|| format!("Failed to load {} wordlist", cli.language))?;
    let threads = cli
        .threads
        .unwrap_or_else(|| InformationConfig::default().threads);

    match cli.command {
        Commands::Query {
            pattern,
            excluded,
            method,
            top,
            handoff,
        } => run_query_command(
            &corpus,
            &alphabet,
            &QueryArgs {
                pattern: &pattern,
                excluded: &excluded,
                method,
                top,
                handoff,
                threads,
            },
        ),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&corpus, &alphabet, SolveConfig::new(word.clone()))
                .with_context(|| format!("Could not solve '{word}'"))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(&corpus, &alphabet, limit, cli.language);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Running benchmark on {count} random words...");
            let result = run_benchmark(&corpus, &alphabet, count, seed);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Corpus => {
            print_corpus_stats(&corpus);
            Ok(())
        }
    }
}

struct QueryArgs<'a> {
    pattern: &'a str,
    excluded: &'a str,
    method: Method,
    top: usize,
    handoff: Option<PathBuf>,
    threads: usize,
}

fn run_query_command(corpus: &WordCorpus, alphabet: &Alphabet, args: &QueryArgs<'_>) -> Result<()> {
    let state = GuessState::parse(args.pattern, args.excluded)
        .context("Invalid pattern or excluded letters")?;

    let result = run_query(corpus, alphabet, state, args.method, args.threads)
        .with_context(|| format!("Query for '{}' failed", args.pattern))?;
    print_query_result(&result, args.top);

    if let Some(path) = &args.handoff {
        write_handoff(path, &result.scores, args.top)?;
    }
    Ok(())
}

fn run_test_all_command(
    corpus: &WordCorpus,
    alphabet: &Alphabet,
    limit: Option<usize>,
    language: Language,
) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Hangman Solver Test ");
    println!("{}", "═".repeat(70));
    println!("\nTesting against {} {language} words", corpus.len());
    println!();

    let stats = run_test_all(corpus, alphabet, limit);
    print_test_all_statistics(&stats);
}
