//! Word corpus for one language
//!
//! A corpus is loaded once and then only read; scorers and pool workers borrow it.

pub mod loader;

use crate::core::{GuessState, Word};
use crate::error::{Result, SolverError};
use crate::solver::matcher;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Immutable, ordered list of candidate words
#[derive(Debug, Clone, Default)]
pub struct WordCorpus {
    words: Vec<Word>,
}

impl WordCorpus {
    /// Load a corpus from a wordlist file
    ///
    /// # Errors
    ///
    /// Returns `SolverError::Io` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = loader::load_from_file(path).map_err(|source| SolverError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log::info!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Build a corpus from in-memory strings, normalized like a loaded file
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::corpus::WordCorpus;
    ///
    /// let corpus = WordCorpus::from_words(["Apple", "", "apply"]);
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.words()[0].text(), "apple");
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .filter_map(|w| Word::new(w).ok())
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Find a word by its (lowercased) text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let text = text.trim().to_lowercase();
        self.words.iter().find(|w| w.text() == text)
    }

    /// Words consistent with the guess state, in corpus order
    #[must_use]
    pub fn filter(&self, state: &GuessState) -> Vec<&Word> {
        matcher::filter(&self.words, state)
    }

    /// Number of words consistent with the guess state
    #[must_use]
    pub fn count_matching(&self, state: &GuessState) -> usize {
        matcher::count_matching(&self.words, state)
    }

    /// Word length histogram as `(length, count)`, most common length first
    ///
    /// Ties are ordered by shorter length first.
    #[must_use]
    pub fn lengths(&self) -> Vec<(usize, usize)> {
        let mut counts: FxHashMap<usize, usize> = FxHashMap::default();
        for word in &self.words {
            *counts.entry(word.len()).or_insert(0) += 1;
        }

        let mut lengths: Vec<(usize, usize)> = counts.into_iter().collect();
        lengths.sort_by(|(len_a, count_a), (len_b, count_b)| {
            count_b.cmp(count_a).then(len_a.cmp(len_b))
        });
        lengths
    }
}
