use thiserror::Error;

pub mod request;
pub mod response;

pub use request::{DEFAULT_API_URL, normalize_name, pokemon_url};
pub use response::{Cries, NamedResource, PokemonRecord, Sprites, StatEntry, TypeSlot, parse_pokemon};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid creature name: {0:?}")]
    InvalidName(String),

    #[error("Empty response body")]
    EmptyBody,
}
