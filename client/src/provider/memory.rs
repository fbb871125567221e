use std::collections::HashMap;

use async_trait::async_trait;
use pokeduel_battle::CreatureSnapshot;

use super::CreatureProvider;
use crate::error::DataUnavailable;

/// Provider serving a fixed set of snapshots, keyed by name
#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    creatures: HashMap<String, CreatureSnapshot>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, snapshot: CreatureSnapshot) {
        self.creatures.insert(snapshot.name().to_string(), snapshot);
    }

    pub fn with(mut self, snapshot: CreatureSnapshot) -> Self {
        self.insert(snapshot);
        self
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

impl FromIterator<CreatureSnapshot> for MemoryProvider {
    fn from_iter<I: IntoIterator<Item = CreatureSnapshot>>(iter: I) -> Self {
        let mut provider = MemoryProvider::new();
        for snapshot in iter {
            provider.insert(snapshot);
        }
        provider
    }
}

#[async_trait]
impl CreatureProvider for MemoryProvider {
    async fn fetch(&self, name: &str) -> Result<CreatureSnapshot, DataUnavailable> {
        self.creatures
            .get(name)
            .cloned()
            .ok_or_else(|| DataUnavailable::UnknownCreature(name.to_string()))
    }
}
