//! Alphabet and language configuration
//!
//! The letters a solver may guess are a value handed to the scorers, so corpora for
//! different languages can be scored side by side in one process.

use std::fmt;
use std::str::FromStr;

/// The guessable letters of a language, in canonical iteration order
///
/// The order is significant: frequency ties are broken by it, and the information
/// scorer lists letters in it before sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from letters, lowercasing them and dropping repeats
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::config::Alphabet;
    ///
    /// let alphabet = Alphabet::new("cabA".chars());
    /// assert_eq!(alphabet.letters(), &['c', 'a', 'b']);
    /// ```
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        let mut unique = Vec::new();
        for letter in letters.into_iter().flat_map(char::to_lowercase) {
            if !unique.contains(&letter) {
                unique.push(letter);
            }
        }
        Self { letters: unique }
    }

    /// `a` through `z`
    #[must_use]
    pub fn english() -> Self {
        Self::new('a'..='z')
    }

    /// `a` through `z` followed by the umlauts `ä`, `ö`, `ü`
    #[must_use]
    pub fn german() -> Self {
        Self::new(('a'..='z').chain(['ä', 'ö', 'ü']))
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

/// Supported corpus languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    German,
}

impl Language {
    /// The alphabet guessed from in this language
    #[must_use]
    pub fn alphabet(self) -> Alphabet {
        match self {
            Self::English => Alphabet::english(),
            Self::German => Alphabet::german(),
        }
    }

    /// Wordlist path used when none is given explicitly
    #[must_use]
    pub const fn default_wordlist(self) -> &'static str {
        match self {
            Self::English => "Wordlists/wordlist_english.txt",
            Self::German => "Wordlists/german.txt",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "ge" | "german" => Ok(Self::German),
            other => Err(format!("Language not supported: {other}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "english"),
            Self::German => write!(f, "german"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_has_26_letters_in_order() {
        let alphabet = Alphabet::english();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.letters()[0], 'a');
        assert_eq!(alphabet.letters()[25], 'z');
    }

    #[test]
    fn german_appends_umlauts() {
        let alphabet = Alphabet::german();
        assert_eq!(alphabet.len(), 29);
        assert_eq!(&alphabet.letters()[26..], &['ä', 'ö', 'ü']);
        assert!(alphabet.contains('ö'));
        assert!(!Alphabet::english().contains('ö'));
    }

    #[test]
    fn new_lowercases_and_dedups() {
        let alphabet = Alphabet::new(['X', 'x', 'Ä', 'y']);
        assert_eq!(alphabet.letters(), &['x', 'ä', 'y']);
    }

    #[test]
    fn language_parses_aliases() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!("English".parse::<Language>(), Ok(Language::English));
        assert_eq!("de".parse::<Language>(), Ok(Language::German));
        assert_eq!("ge".parse::<Language>(), Ok(Language::German));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn language_default_wordlists() {
        assert!(Language::English.default_wordlist().ends_with("english.txt"));
        assert!(Language::German.default_wordlist().ends_with("german.txt"));
        assert_eq!(Language::German.alphabet(), Alphabet::german());
    }
}
