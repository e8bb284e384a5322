//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Normalize raw text into a searchable word
///
/// Uppercases and drops everything but the letters A-Z.
///
/// # Examples
/// ```
/// use pangram_search::wordlists::loader::clean_word;
///
/// assert_eq!(clean_word("Sea-horse"), "SEAHORSE");
/// assert_eq!(clean_word("o'clock!"), "OCLOCK");
/// assert_eq!(clean_word("1984"), "");
/// ```
#[must_use]
pub fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Load words from a file
///
/// Takes the first whitespace-separated token of each line, so plain word
/// lists and `WORD COUNT` frequency files both work. Tokens are cleaned with
/// [`clean_word`]; lines that clean to nothing are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use pangram_search::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/animals.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse word list text, one entry per line
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let token = line.split_whitespace().next()?;
            let cleaned = clean_word(token);
            if cleaned.is_empty() {
                None
            } else {
                Some(Word::new(cleaned))
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use pangram_search::wordlists::loader::words_from_slice;
/// use pangram_search::wordlists::ANIMALS;
///
/// let words = words_from_slice(ANIMALS);
/// assert_eq!(words.len(), ANIMALS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().map(|&s| Word::new(s)).collect()
}

/// Pick `n` words at random, reproducibly for a given `seed`
///
/// Returns every word when `n` is at least the list length. The sample keeps
/// the original relative order.
#[must_use]
pub fn sample(words: &[Word], n: usize, seed: u64) -> Vec<Word> {
    if n >= words.len() {
        return words.to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let indices: Vec<usize> = (0..words.len()).collect();
    let mut picked: Vec<usize> = indices.choose_multiple(&mut rng, n).copied().collect();
    picked.sort_unstable();

    picked.into_iter().map(|i| words[i].clone()).collect()
}
