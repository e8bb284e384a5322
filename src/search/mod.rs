//! Minimal pangram search
//!
//! A depth-bounded backtracking search with branch-and-bound pruning. Given a
//! word list it finds word combinations covering the alphabet, sorted by the
//! total number of letters used.

mod config;
mod engine;
mod observer;
mod solution;
mod state;

pub use config::{PruneMode, SearchConfig};
pub use engine::{PangramSearch, SearchOutcome, find_pangrams};
pub use observer::{SearchObserver, SearchStats};
pub use solution::{Pangrams, Solution};
pub use state::{Ranked, SearchState};
