//! Core domain types for pangram search
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, cheap to copy or clone, and independent of any search.

mod letters;
mod word;

pub use letters::{Alphabet, AlphabetError, LETTER_COUNT, LetterSet};
pub use word::{Word, WordError};
