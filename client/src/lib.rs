//! Creature data provider, prediction service and terminal front end for pokeduel.
//!
//! Names typed by the user are normalized, resolved through a
//! [`CreatureProvider`] (PokeAPI over HTTP by default) and handed to
//! [`pokeduel_battle::decide`]. Any lookup failure surfaces as
//! [`DataUnavailable`] before a prediction is attempted.

pub mod app;
pub mod cli;
pub mod config;
mod error;
pub mod logging;
pub mod provider;
pub mod render;
mod service;

pub use app::{App, AppError, Reply};
pub use config::ClientConfig;
pub use error::DataUnavailable;
pub use provider::{CreatureProvider, MemoryProvider, PokeApiProvider, RetryPolicy};
pub use service::{BattleService, Prediction};

pub use pokeduel_battle::{CreatureSnapshot, Reason, Side, Verdict};
