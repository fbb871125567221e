//! Battle outcome prediction

mod decider;
mod verdict;

pub use decider::{DOMINANCE_THRESHOLD, decide};
pub use verdict::{Reason, Side, Verdict};
