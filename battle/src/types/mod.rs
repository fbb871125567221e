//! Domain types for battle prediction

mod pokemon_type;
mod snapshot;
mod stats;

pub use pokemon_type::{NEUTRAL, TYPE_CHART, Type, multiplier};
pub use snapshot::CreatureSnapshot;
pub use stats::{BaseStats, aggregate};
