//! Creature data providers
//!
//! A provider turns a normalized name into a [`CreatureSnapshot`] or an
//! explicit [`DataUnavailable`].

mod memory;
mod pokeapi;
mod retry;

use async_trait::async_trait;
use pokeduel_battle::CreatureSnapshot;

use crate::error::DataUnavailable;

pub use memory::MemoryProvider;
pub use pokeapi::{PokeApiProvider, StatusClass, classify_status};
pub use retry::RetryPolicy;

/// Source of creature snapshots.
///
/// `name` is already normalized (see [`pokeduel_protocol::normalize_name`]).
#[async_trait]
pub trait CreatureProvider: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<CreatureSnapshot, DataUnavailable>;
}
