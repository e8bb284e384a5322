//! Pangram Search
//!
//! Finds minimal pangrams: combinations of words that together use every letter
//! of the alphabet, preferring combinations with the fewest total letters.
//!
//! # Quick Start
//!
//! ```rust
//! use pangram_search::search::find_pangrams;
//! use pangram_search::wordlists::{ANIMALS, loader::words_from_slice};
//!
//! let animals = words_from_slice(ANIMALS);
//! let pangrams = find_pangrams(&animals, 6);
//!
//! for solution in pangrams.iter().take(3) {
//!     println!("{solution}");
//! }
//! assert_eq!(pangrams.shortest().unwrap().letter_count(), 41);
//! ```

// Core domain types
pub mod core;

// Search engine
pub mod search;

// Letter coverage diagnostics
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
