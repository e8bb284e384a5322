//! Per-letter word coverage
//!
//! Counts how many distinct words contain each letter, to spot letters that
//! will bottleneck a pangram search before running it.

use crate::core::{Alphabet, LETTER_COUNT, LetterSet, Word};
use rustc_hash::FxHashSet;

/// How many distinct words contain a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCoverage {
    pub letter: char,
    pub count: usize,
}

/// Count, for each letter, the distinct words containing it
///
/// Returns letters from least to most covered, ties in alphabetical order.
/// Letters no word contains are left out. Only A-Z are tracked.
///
/// # Examples
/// ```
/// use pangram_search::analysis::analyze_letters;
/// use pangram_search::core::Word;
///
/// let words = vec![Word::new("AB"), Word::new("BC")];
/// let coverage = analyze_letters(&words);
///
/// let pairs: Vec<(char, usize)> = coverage.iter().map(|c| (c.letter, c.count)).collect();
/// assert_eq!(pairs, [('A', 1), ('C', 1), ('B', 2)]);
/// ```
#[must_use]
pub fn analyze_letters(words: &[Word]) -> Vec<LetterCoverage> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut counts = [0usize; LETTER_COUNT];

    for word in words.iter().filter(|&w| seen.insert(w.text())) {
        for letter in word.letters().letters() {
            counts[usize::from(letter - b'A')] += 1;
        }
    }

    let mut coverage: Vec<LetterCoverage> = counts
        .iter()
        .zip(b'A'..=b'Z')
        .filter(|&(&count, _)| count > 0)
        .map(|(&count, letter)| LetterCoverage {
            letter: char::from(letter),
            count,
        })
        .collect();

    // Stable sort keeps the alphabetical order among ties
    coverage.sort_by_key(|c| c.count);
    coverage
}

/// The `n` least-covered letters
#[must_use]
pub fn bottlenecks(coverage: &[LetterCoverage], n: usize) -> &[LetterCoverage] {
    &coverage[..n.min(coverage.len())]
}

/// Letters of `alphabet` that no word contains
///
/// A non-empty result means no pangram over `alphabet` exists for these words.
#[must_use]
pub fn missing_letters(words: &[Word], alphabet: Alphabet) -> LetterSet {
    let covered = words
        .iter()
        .fold(LetterSet::EMPTY, |acc, w| acc.union(w.letters()));
    alphabet.missing(covered)
}
