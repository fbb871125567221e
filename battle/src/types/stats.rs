//! Base stats and the stat aggregator

use crate::error::PredictError;

/// Base stat values keyed by stat name (hp, attack, special-defense, ...)
///
/// Insertion order is kept for display. Names are stored lowercase and
/// re-inserting a name replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    entries: Vec<(String, u32)>,
}

impl BaseStats {
    /// Create an empty stat mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a stat, returning the previous value if it was already present
    pub fn insert(&mut self, name: impl AsRef<str>, value: u32) -> Option<u32> {
        let key = name.as_ref().trim().to_lowercase();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Get a stat by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<u32> {
        let key = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (name, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all base values, see [`aggregate`]
    pub fn total(&self) -> Result<u64, PredictError> {
        aggregate(self)
    }
}

impl<S: AsRef<str>> FromIterator<(S, u32)> for BaseStats {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut stats = BaseStats::new();
        for (name, value) in iter {
            stats.insert(name, value);
        }
        stats
    }
}

/// Reduce a stat mapping to its base stat total.
///
/// An empty mapping is [`PredictError::EmptyStats`] rather than 0, so a
/// creature with no data can never tie a real one.
pub fn aggregate(stats: &BaseStats) -> Result<u64, PredictError> {
    if stats.is_empty() {
        return Err(PredictError::EmptyStats);
    }
    Ok(stats.iter().map(|(_, v)| u64::from(v)).sum())
}
