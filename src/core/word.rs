//! Candidate word representation
//!
//! A Word stores the uppercased text together with its letter set, which is all
//! the search needs: repeated letters only matter for the letter count.

use super::letters::LetterSet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A candidate word with its derived letter set
///
/// Equality, ordering and hashing use the text only.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: LetterSet,
    letter_count: usize,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is uppercased but otherwise taken as-is: symbols simply
    /// contribute no letters, and an empty word never helps coverage.
    ///
    /// # Examples
    /// ```
    /// use pangram_search::core::Word;
    ///
    /// let word = Word::new("Giraffe");
    /// assert_eq!(word.text(), "GIRAFFE");
    /// assert_eq!(word.letter_count(), 7);
    /// assert_eq!(word.letters().len(), 6);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into().to_uppercase();
        let letters = LetterSet::from_word(&text);
        let letter_count = text.chars().count();

        Self {
            text,
            letters,
            letter_count,
        }
    }

    /// Create a Word, rejecting anything but ASCII letters
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use pangram_search::core::Word;
    ///
    /// assert_eq!(Word::parse("lynx").unwrap().text(), "LYNX");
    /// assert!(Word::parse("").is_err());
    /// assert!(Word::parse("sea horse").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordError> {
        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self::new(text))
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Number of characters in the word, repeats included
    #[inline]
    #[must_use]
    pub const fn letter_count(&self) -> usize {
        self.letter_count
    }

    /// Count how many of the `needed` letters this word supplies
    #[inline]
    #[must_use]
    pub const fn overlap(&self, needed: LetterSet) -> u32 {
        self.letters.intersection(needed).len()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
