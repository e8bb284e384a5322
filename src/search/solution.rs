//! Found pangrams and the sorted result sequence

use crate::core::Word;
use std::fmt;

/// A word combination covering the whole alphabet
///
/// Ordered by total letter count, then by the sorted word list, which is the
/// order results are reported in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    letter_count: usize,
    words: Vec<String>,
}

impl Solution {
    /// Build a solution from the words chosen along a search path
    ///
    /// # Examples
    /// ```
    /// use pangram_search::core::Word;
    /// use pangram_search::search::Solution;
    ///
    /// let lynx = Word::new("LYNX");
    /// let fox = Word::new("FOX");
    /// let solution = Solution::from_words(&[&lynx, &fox]);
    ///
    /// assert_eq!(solution.letter_count(), 7);
    /// assert_eq!(solution.words(), ["FOX", "LYNX"]);
    /// assert_eq!(solution.to_string(), "(7) FOX, LYNX");
    /// ```
    #[must_use]
    pub fn from_words(chosen: &[&Word]) -> Self {
        let letter_count = chosen.iter().map(|w| w.letter_count()).sum();
        let mut words: Vec<String> = chosen.iter().map(|w| w.text().to_string()).collect();
        words.sort();

        Self {
            letter_count,
            words,
        }
    }

    /// Total number of letters across all words, repeats included
    #[inline]
    #[must_use]
    pub const fn letter_count(&self) -> usize {
        self.letter_count
    }

    /// The chosen words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.letter_count, self.words.join(", "))
    }
}

/// Every solution of a search, sorted ascending by letter count
///
/// Ties are ordered by the sorted word lists. Sorting happens once when the
/// sequence is built, so solutions gathered from sibling branches in any order
/// end up globally ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pangrams {
    solutions: Vec<Solution>,
}

impl Pangrams {
    /// Collect solutions in any order into a sorted sequence
    #[must_use]
    pub fn from_unsorted(mut solutions: Vec<Solution>) -> Self {
        solutions.sort();
        Self { solutions }
    }

    /// Merge two result sequences, keeping the global order
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut solutions = self.solutions;
        solutions.extend(other.solutions);
        Self::from_unsorted(solutions)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    /// The solution with the fewest letters, if any
    #[must_use]
    pub fn shortest(&self) -> Option<&Solution> {
        self.solutions.first()
    }

    /// All solutions sharing the minimal letter count
    #[must_use]
    pub fn best(&self) -> &[Solution] {
        let Some(first) = self.solutions.first() else {
            return &[];
        };
        let end = self
            .solutions
            .partition_point(|s| s.letter_count == first.letter_count);
        &self.solutions[..end]
    }
}

impl FromIterator<Solution> for Pangrams {
    fn from_iter<I: IntoIterator<Item = Solution>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

impl IntoIterator for Pangrams {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Pangrams {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}
