mod tests;

use serde::Deserialize;

use crate::ParseError;

/// A `{ name, url }` reference to another PokeAPI resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// One entry of the `types` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// One entry of the `stats` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Cries {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub legacy: Option<String>,
}

/// The subset of a `GET /pokemon/{name}` response used for predictions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub cries: Cries,
}

impl PokemonRecord {
    /// Type names ordered by slot (primary first)
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.into_iter().map(|s| s.kind.name.as_str()).collect()
    }

    /// (stat name, base value) pairs in response order
    pub fn stat_pairs(&self) -> impl Iterator<Item = (&str, u32)> {
        self.stats
            .iter()
            .map(|s| (s.stat.name.as_str(), s.base_stat))
    }
}

/// Parse a `pokemon` response body
pub fn parse_pokemon(body: &str) -> Result<PokemonRecord, ParseError> {
    let body = body.trim();

    if body.is_empty() {
        return Err(ParseError::EmptyBody);
    }

    let record: PokemonRecord =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

    if record.name.is_empty() {
        return Err(ParseError::MissingField("name".to_string()));
    }

    Ok(record)
}
