use crate::ParseError;

/// Base URL of the public PokeAPI v2 endpoint
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Normalize user input into a PokeAPI resource name.
///
/// Input is case-insensitive. Whitespace becomes `-`, punctuation that the
/// API strips (`.`, `'`, `:`) is dropped, accented `e` is folded and the
/// gender symbols map to the `-f`/`-m` suffixes the API uses
/// (`"Nidoran♀"` → `"nidoran-f"`, `"Mr. Mime"` → `"mr-mime"`).
pub fn normalize_name(input: &str) -> Result<String, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidName(input.to_string()));
    }

    let mut name = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            c if c.is_ascii_alphanumeric() => name.push(c.to_ascii_lowercase()),
            c if c.is_whitespace() || c == '-' || c == '_' => name.push('-'),
            '.' | '\'' | '’' | ':' => {}
            'é' | 'É' | 'è' | 'È' => name.push('e'),
            '♀' => name.push_str("-f"),
            '♂' => name.push_str("-m"),
            _ => return Err(ParseError::InvalidName(input.to_string())),
        }
    }

    // Collapse runs of separators
    let collapsed = name
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if collapsed.is_empty() {
        return Err(ParseError::InvalidName(input.to_string()));
    }

    Ok(collapsed)
}

/// Build the `pokemon` resource URL: BASE/pokemon/NAME
pub fn pokemon_url(base: &str, name: &str) -> String {
    format!("{}/pokemon/{}", base.trim_end_matches('/'), name)
}
