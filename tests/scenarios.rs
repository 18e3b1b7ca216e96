//! End-to-end scenarios over a small corpus loaded from disk

use hangman_solver::commands::{Method, SolveConfig, run_query, solve_word};
use hangman_solver::config::{Alphabet, Language};
use hangman_solver::core::{Cell, GuessState, Pattern, Word};
use hangman_solver::corpus::WordCorpus;
use hangman_solver::output::{read_handoff, write_handoff};
use hangman_solver::solver::{
    InformationConfig, InformationMode, InformationScorer, LetterScore, Metric, frequency,
};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

const WORDLIST: &str = "Apple\napply\nAMPLE\namble\n\ncat\ndog\ncot\nbanana\nbandit\ncabana\n";

static FIXTURE_ID: AtomicUsize = AtomicUsize::new(0);

fn temp_file(name: &str) -> PathBuf {
    let id = FIXTURE_ID.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "hangman_solver_scenarios_{}_{id}_{name}",
        std::process::id()
    ))
}

fn corpus() -> WordCorpus {
    let path = temp_file("wordlist.txt");
    fs::write(&path, WORDLIST).unwrap();
    let corpus = WordCorpus::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    corpus
}

#[test]
fn loaded_corpus_is_normalized() {
    let corpus = corpus();
    assert_eq!(corpus.len(), 10);
    assert!(corpus.words().iter().all(|w| w.text() == w.text().to_lowercase()));
    assert!(corpus.find("ample").is_some());
}

#[test]
fn filtered_words_honor_every_constraint() {
    let corpus = corpus();
    let state = GuessState::parse("a_p__", "y,z").unwrap();

    let candidates = corpus.filter(&state);
    assert!(!candidates.is_empty());

    for word in &candidates {
        assert_eq!(word.len(), state.pattern().len());
        assert!(state.excluded().iter().all(|l| !word.has_letter(l)));
        for (i, cell) in state.pattern().cells().iter().enumerate() {
            match cell {
                Cell::Revealed(letter) => assert_eq!(word.char_at(i), *letter),
                Cell::Unknown => {
                    assert!(!state.revealed_letters().contains(&word.char_at(i)));
                }
            }
        }
    }

    let texts: Vec<&str> = candidates.iter().map(|w| w.text()).collect();
    assert_eq!(texts, ["ample"]);
}

#[test]
fn reveal_twice_equals_reveal_once() {
    let word = Word::new("banana").unwrap();
    let once = Pattern::unknown(6).reveal('n', &word);
    assert_eq!(once.reveal('n', &word), once);
}

#[test]
fn apple_apply_ample_frequency() {
    let corpus = corpus();
    let state = GuessState::parse("a____", "").unwrap();
    let candidates = corpus.filter(&state);
    assert_eq!(candidates.len(), 4);

    let scores = frequency::score(&candidates, &Alphabet::english(), &state);
    let count = |letter: char| {
        scores
            .iter()
            .find(|s| s.letter == letter)
            .map(|s| s.metric)
    };

    assert_eq!(count('l'), Some(Metric::Count(4)));
    assert_eq!(count('p'), Some(Metric::Count(3)));
    assert_eq!(count('e'), Some(Metric::Count(3)));
    assert_eq!(count('y'), Some(Metric::Count(1)));
    assert_eq!(scores[0], LetterScore::count('l', 4));
}

#[test]
fn unrelated_exclusion_leaves_the_ranking_alone() {
    let corpus = corpus();
    let alphabet = Alphabet::english();
    let plain = run_query(
        &corpus,
        &alphabet,
        GuessState::parse("_____", "").unwrap(),
        Method::Frequency,
        1,
    )
    .unwrap();
    let excluded = run_query(
        &corpus,
        &alphabet,
        GuessState::parse("_____", "x").unwrap(),
        Method::Frequency,
        1,
    )
    .unwrap();

    assert_eq!(plain.candidates, excluded.candidates);
    assert_eq!(plain.best(), excluded.best());
}

#[test]
fn single_candidate_has_no_information_left() {
    let corpus = corpus();
    let state = GuessState::parse("d__", "").unwrap();
    let candidates = corpus.filter(&state);
    assert_eq!(candidates.len(), 1);

    let scorer = InformationScorer::new(
        Alphabet::english(),
        InformationConfig::default().with_threads(2),
    )
    .unwrap();
    let scores = scorer.score(&candidates, &state).unwrap();

    assert!(scores.iter().all(|s| s.metric.value() == 0.0));
}

#[test]
fn information_ranks_distinguishing_letters_first() {
    let corpus = corpus();
    let state = GuessState::parse("a____", "").unwrap();
    let candidates = corpus.filter(&state);

    let present = InformationScorer::new(
        Alphabet::english(),
        InformationConfig::default().with_threads(2),
    )
    .unwrap()
    .score(&candidates, &state)
    .unwrap();
    let both = InformationScorer::new(
        Alphabet::english(),
        InformationConfig::default()
            .with_threads(2)
            .with_mode(InformationMode::BothBranches),
    )
    .unwrap()
    .score(&candidates, &state)
    .unwrap();

    // 'l' is in every candidate at the same position
    let l = present.iter().find(|s| s.letter == 'l').unwrap();
    assert!(l.metric.value().abs() < 1e-9);
    assert!(present[0].metric.value() > 0.0);
    assert!(both[0].metric.value() >= present[0].metric.value());
}

#[test]
fn cat_alone_is_solved_in_three_rounds() {
    let corpus = WordCorpus::from_words(["cat", "apple", "banana"]);
    let result = solve_word(&corpus, &Alphabet::english(), SolveConfig::new("cat".into())).unwrap();

    assert!(result.success);
    assert_eq!(result.rounds.len(), 3);
    assert!(result.rounds.iter().all(|r| r.hit));
}

#[test]
fn every_corpus_word_is_solved() {
    let corpus = corpus();
    let alphabet = Language::English.alphabet();

    for word in corpus.words() {
        let result = solve_word(&corpus, &alphabet, SolveConfig::new(word.text().to_string()))
            .unwrap();
        assert!(result.success, "{} was not solved", word.text());
        assert!(result.rounds.len() <= alphabet.len());
    }
}

#[test]
fn german_query_ranks_umlauts() {
    let corpus = WordCorpus::from_words(["bär", "bör", "bar"]);
    let state = GuessState::parse("b_r", "a").unwrap();

    let result = run_query(
        &corpus,
        &Language::German.alphabet(),
        state,
        Method::Frequency,
        1,
    )
    .unwrap();

    assert_eq!(result.candidates, ["bär", "bör"]);
    assert_eq!(result.best(), Some(LetterScore::count('ä', 1)));
}

#[test]
fn handoff_round_trip_through_query() {
    let corpus = corpus();
    let state = GuessState::parse("a____", "").unwrap();
    let result = run_query(&corpus, &Alphabet::english(), state, Method::Frequency, 1).unwrap();

    let path = temp_file("handoff.json");
    write_handoff(&path, &result.scores, 3).unwrap();
    let pairs = read_handoff(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let letters: Vec<&str> = pairs.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(letters, ["l", "e", "p"]);
    assert!((pairs[0].1 - 4.0).abs() < f64::EPSILON);
}
