//! Type chart, stat aggregation and outcome prediction for Pokemon matchups.
//!
//! This crate holds the decision logic of pokeduel. It performs no I/O:
//! snapshots come in as plain values and a [`Verdict`] comes out.
//!
//! # Overview
//!
//! `pokeduel-battle` sits between `pokeduel-protocol` (wire format) and the client:
//!
//! ```text
//! pokeduel-protocol (PokeAPI records)
//!        │
//!        ▼
//! pokeduel-battle (snapshots + prediction) ← THIS CRATE
//!        │
//!        ▼
//! pokeduel-client (provider, service, CLI)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - Pokemon types with the effectiveness chart
//! - [`BaseStats`] - Named base stat values, reduced by [`aggregate`]
//! - [`CreatureSnapshot`] - One creature's name, types and stats
//! - [`Verdict`] - Winner, [`Reason`] and the figures behind them
//!
//! # Example Usage
//!
//! ```
//! use pokeduel_battle::{BaseStats, CreatureSnapshot, Reason, Side, decide};
//!
//! let squirtle = CreatureSnapshot::new(
//!     "squirtle",
//!     ["water"],
//!     BaseStats::from_iter([("hp", 150), ("speed", 150)]),
//! )?;
//! let charmander = CreatureSnapshot::new(
//!     "charmander",
//!     ["fire"],
//!     BaseStats::from_iter([("hp", 150), ("speed", 150)]),
//! )?;
//!
//! let verdict = decide(&squirtle, &charmander);
//! assert_eq!(verdict.winner, Side::First);
//! assert_eq!(verdict.reason, Reason::TypeAdvantage);
//! # Ok::<(), pokeduel_battle::PredictError>(())
//! ```

pub mod error;
pub mod predict;
pub mod query;
pub mod types;

// Re-export main types at crate root for convenience
pub use error::PredictError;
pub use predict::{DOMINANCE_THRESHOLD, Reason, Side, Verdict, decide};
pub use query::effectiveness;
pub use types::{BaseStats, CreatureSnapshot, NEUTRAL, TYPE_CHART, Type, aggregate, multiplier};
