//! Wordlist loading utilities
//!
//! One word per line; lines are trimmed and lowercased, blank lines are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns the words in file order, skipping blank lines and entries containing `_`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use hangman_solver::corpus::loader::load_from_file;
///
/// let words = load_from_file("Wordlists/wordlist_english.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated text into words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use hangman_solver::corpus::loader::words_from_slice;
///
/// let words = words_from_slice(&["Cat", "", "dog"]);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "cat");
/// ```
#[must_use]
pub fn words_from_slice<S: AsRef<str>>(slice: &[S]) -> Vec<Word> {
    slice.iter().filter_map(|s| Word::new(s).ok()).collect()
}
