//! Query helpers for battle decision making
//!
//! This module provides the effectiveness evaluator used by the predictor
//! and utilities for analyzing a defender's type matchups.

mod matchup;

pub use matchup::{effectiveness, immunities, resistances, weaknesses};
