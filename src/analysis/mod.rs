//! Word list diagnostics
//!
//! Letter coverage statistics computed independently of any search.

mod coverage;

pub use coverage::{LetterCoverage, analyze_letters, bottlenecks, missing_letters};
