//! Creature snapshot types

use pokeduel_protocol::PokemonRecord;

use super::pokemon_type::Type;
use super::stats::{BaseStats, aggregate};
use crate::error::PredictError;

/// Immutable description of one creature, built fresh for each prediction.
///
/// A snapshot always has a non-empty stat mapping, so its stat total is
/// known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreatureSnapshot {
    /// Lowercase identifier
    name: String,

    /// Type tags in slot order; unknown tags are kept
    types: Vec<String>,

    stats: BaseStats,

    stat_total: u64,

    sprite_url: Option<String>,

    cry_url: Option<String>,
}

impl CreatureSnapshot {
    /// Create a snapshot, rejecting an empty name or stat mapping
    pub fn new<I, S>(name: &str, types: I, stats: BaseStats) -> Result<Self, PredictError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(PredictError::EmptyName);
        }

        let stat_total = aggregate(&stats)?;
        let types = types
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Self {
            name,
            types,
            stats,
            stat_total,
            sprite_url: None,
            cry_url: None,
        })
    }

    /// Create from a PokeAPI record
    pub fn from_protocol(record: &PokemonRecord) -> Result<Self, PredictError> {
        let stats = record.stat_pairs().collect::<BaseStats>();
        let mut snapshot = Self::new(&record.name, record.type_names(), stats)?;
        snapshot.sprite_url = record.sprites.front_default.clone();
        snapshot.cry_url = record
            .cries
            .latest
            .clone()
            .or_else(|| record.cries.legacy.clone());
        Ok(snapshot)
    }

    pub fn with_sprite_url(mut self, url: impl Into<String>) -> Self {
        self.sprite_url = Some(url.into());
        self
    }

    pub fn with_cry_url(mut self, url: impl Into<String>) -> Self {
        self.cry_url = Some(url.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name with its first letter capitalized ("pikachu" -> "Pikachu")
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Type tags that name one of the 18 known types, in slot order
    pub fn known_types(&self) -> Vec<Type> {
        self.types.iter().filter_map(|t| Type::from_tag(t)).collect()
    }

    pub fn stats(&self) -> &BaseStats {
        &self.stats
    }

    /// Base stat total
    pub fn stat_total(&self) -> u64 {
        self.stat_total
    }

    pub fn sprite_url(&self) -> Option<&str> {
        self.sprite_url.as_deref()
    }

    pub fn cry_url(&self) -> Option<&str> {
        self.cry_url.as_deref()
    }
}
