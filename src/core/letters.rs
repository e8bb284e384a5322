//! Letter sets over the A-Z alphabet
//!
//! A `LetterSet` packs one bit per letter into a `u32`, so coverage union,
//! overlap counting and superset checks are single bitwise operations.

use std::fmt;

/// Number of letters a `LetterSet` can track (A-Z)
pub const LETTER_COUNT: usize = 26;

const FULL_MASK: u32 = (1 << LETTER_COUNT) - 1;

/// A set of uppercase letters A-Z stored as a bitmask
///
/// Bit `i` is set when the letter `b'A' + i` is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Every letter A-Z
    pub const ALL: Self = Self(FULL_MASK);

    /// Build the set of letters present in `text`
    ///
    /// Lowercase ASCII letters are folded to uppercase; any other byte is ignored.
    ///
    /// # Examples
    /// ```
    /// use pangram_search::core::LetterSet;
    ///
    /// let set = LetterSet::from_word("Zebra!");
    /// assert_eq!(set.to_string(), "ABERZ");
    /// assert_eq!(set.len(), 5);
    /// ```
    #[must_use]
    pub fn from_word(text: &str) -> Self {
        text.bytes().fold(Self::EMPTY, Self::with)
    }

    /// Bit index for an ASCII letter, or `None` for anything else
    #[inline]
    const fn index_of(letter: u8) -> Option<u32> {
        match letter {
            b'A'..=b'Z' => Some((letter - b'A') as u32),
            b'a'..=b'z' => Some((letter - b'a') as u32),
            _ => None,
        }
    }

    /// Return a copy of this set with `letter` added (non-letters are ignored)
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        match Self::index_of(letter) {
            Some(index) => Self(self.0 | (1 << index)),
            None => self,
        }
    }

    /// Add a letter in place
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        *self = self.with(letter);
    }

    /// Check if the set contains a specific letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::index_of(letter) {
            Some(index) => self.0 & (1 << index) != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Letters in `self` that are not in `other`
    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        other.0 & !self.0 == 0
    }

    /// Iterate over the letters in alphabetical order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (0..LETTER_COUNT as u8)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(|i| b'A' + i)
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Error type for invalid alphabets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    Empty,
    InvalidLetter(char),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Alphabet must contain at least one letter"),
            Self::InvalidLetter(c) => {
                write!(f, "Alphabet may only contain letters A-Z, got {c:?}")
            }
        }
    }
}

impl std::error::Error for AlphabetError {}

/// The fixed set of target letters a pangram must cover
///
/// Immutable once built; the search engine holds it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet(LetterSet);

impl Alphabet {
    /// The 26-letter English alphabet
    #[must_use]
    pub const fn english() -> Self {
        Self(LetterSet::ALL)
    }

    /// Build an alphabet from a subset of A-Z
    ///
    /// Letters are case-insensitive and duplicates are ignored.
    ///
    /// # Errors
    /// Returns `AlphabetError` if `letters` is empty or contains anything but A-Z.
    ///
    /// # Examples
    /// ```
    /// use pangram_search::core::Alphabet;
    ///
    /// let abc = Alphabet::from_letters("cab").unwrap();
    /// assert_eq!(abc.len(), 3);
    /// assert!(Alphabet::from_letters("ab1").is_err());
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self, AlphabetError> {
        let mut set = LetterSet::EMPTY;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(AlphabetError::InvalidLetter(c));
            }
            set.insert(c as u8);
        }

        if set.is_empty() {
            return Err(AlphabetError::Empty);
        }
        Ok(Self(set))
    }

    /// Get the letters of this alphabet
    #[inline]
    #[must_use]
    pub const fn letters(self) -> LetterSet {
        self.0
    }

    /// Number of letters in the alphabet
    #[inline]
    #[must_use]
    pub const fn len(self) -> u32 {
        self.0.len()
    }

    /// Always false for an alphabet built through `english` or `from_letters`
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// Letters of the alphabet not yet in `covered`
    #[inline]
    #[must_use]
    pub const fn missing(self, covered: LetterSet) -> LetterSet {
        self.0.difference(covered)
    }

    /// Check if `covered` includes every letter of the alphabet
    #[inline]
    #[must_use]
    pub const fn is_covered_by(self, covered: LetterSet) -> bool {
        covered.is_superset(self.0)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
