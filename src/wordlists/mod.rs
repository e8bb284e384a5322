//! Word lists for pangram search
//!
//! Provides the embedded animal fixture plus loading and cleaning of word files.

mod embedded;
pub mod loader;

pub use embedded::{ANIMALS, ANIMALS_COUNT};
