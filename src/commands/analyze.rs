//! Letter coverage analysis command
//!
//! Reports how well a word list covers the alphabet before searching it.

use crate::analysis::{LetterCoverage, analyze_letters, missing_letters};
use crate::core::{Alphabet, LetterSet, Word};
use rustc_hash::FxHashSet;

/// Result of analyzing a word list
pub struct AnalysisResult {
    /// Distinct words analyzed
    pub total_words: usize,
    /// Letters from least to most covered
    pub coverage: Vec<LetterCoverage>,
    /// Alphabet letters no word contains
    pub missing: LetterSet,
}

impl AnalysisResult {
    /// Whether a pangram over the alphabet is possible at all
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Analyze letter coverage of a word list against an alphabet
#[must_use]
pub fn analyze_word_list(words: &[Word], alphabet: Alphabet) -> AnalysisResult {
    let total_words = words
        .iter()
        .map(Word::text)
        .collect::<FxHashSet<_>>()
        .len();

    AnalysisResult {
        total_words,
        coverage: analyze_letters(words),
        missing: missing_letters(words, alphabet),
    }
}
