//! Client configuration structures and loaders.
use std::env;
use std::time::Duration;

use pokeduel_protocol::DEFAULT_API_URL;

use crate::provider::RetryPolicy;

/// Settings for the PokeAPI provider and the binary's logging.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            retry: RetryPolicy::default(),
            log_filter: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_URL` - API base URL (default: `https://pokeapi.co/api/v2`)
    /// - `POKEDUEL_TIMEOUT_SECS` - Per-request timeout, at least 1 (default: 10)
    /// - `POKEDUEL_MAX_ATTEMPTS` - Attempts per lookup, at least 1 (default: 3)
    /// - `POKEDUEL_RETRY_DELAY_MS` - Delay before the first retry (default: 250)
    /// - `POKEDUEL_LOG` - Log filter directive (default: `info`)
    ///
    /// Values that fail to parse are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEAPI_URL")
            && !url.trim().is_empty()
        {
            config.api_url = url.trim().to_string();
        }

        if let Some(secs) = read_var::<u64, _>(&lookup, "POKEDUEL_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(secs.max(1));
        }

        if let Some(attempts) = read_var::<usize, _>(&lookup, "POKEDUEL_MAX_ATTEMPTS") {
            config.retry.max_attempts = attempts.max(1);
        }

        if let Some(millis) = read_var::<u64, _>(&lookup, "POKEDUEL_RETRY_DELAY_MS") {
            config.retry.initial_delay = Duration::from_millis(millis);
        }

        if let Some(filter) = lookup("POKEDUEL_LOG") {
            config.log_filter = filter;
        }

        config
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment variable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.log_filter, "info");
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("POKEAPI_URL", " http://localhost:8000/api/v2 "),
            ("POKEDUEL_TIMEOUT_SECS", "30"),
            ("POKEDUEL_MAX_ATTEMPTS", "5"),
            ("POKEDUEL_RETRY_DELAY_MS", "100"),
            ("POKEDUEL_LOG", "debug"),
        ]));

        assert_eq!(config.api_url, "http://localhost:8000/api/v2");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.initial_delay, Duration::from_millis(100));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_clamps_to_minimums() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("POKEDUEL_TIMEOUT_SECS", "0"),
            ("POKEDUEL_MAX_ATTEMPTS", "0"),
        ]));

        assert_eq!(config.timeout, Duration::from_secs(1));
        assert_eq!(config.retry.max_attempts, 1);
    }

    #[test]
    fn test_unparsable_and_blank_values_keep_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("POKEAPI_URL", "   "),
            ("POKEDUEL_TIMEOUT_SECS", "abc"),
            ("POKEDUEL_MAX_ATTEMPTS", "-2"),
            ("POKEDUEL_RETRY_DELAY_MS", "soon"),
        ]));
        let defaults = ClientConfig::default();

        assert_eq!(config.api_url, defaults.api_url);
        assert_eq!(config.timeout, defaults.timeout);
        assert_eq!(config.retry, defaults.retry);
    }
}
