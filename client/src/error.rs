use pokeduel_battle::PredictError;
use pokeduel_protocol::ParseError;
use thiserror::Error;

/// A creature name could not be resolved into a usable snapshot.
///
/// Raised at the provider boundary; a prediction never starts while either
/// side is unavailable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataUnavailable {
    #[error("{0:?} is not a valid Pokémon name")]
    InvalidName(String),

    #[error("no Pokémon named {0:?}")]
    UnknownCreature(String),

    #[error("lookup of {name:?} failed: {reason}")]
    Provider { name: String, reason: String },

    #[error("malformed record for {name:?}: {source}")]
    Malformed {
        name: String,
        #[source]
        source: ParseError,
    },

    #[error("unusable record for {name:?}: {source}")]
    Degenerate {
        name: String,
        #[source]
        source: PredictError,
    },
}

impl DataUnavailable {
    /// The name (as looked up) this failure refers to
    pub fn name(&self) -> &str {
        match self {
            Self::InvalidName(name) | Self::UnknownCreature(name) => name,
            Self::Provider { name, .. }
            | Self::Malformed { name, .. }
            | Self::Degenerate { name, .. } => name,
        }
    }
}
