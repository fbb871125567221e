use async_trait::async_trait;
use pokeduel_battle::CreatureSnapshot;
use pokeduel_protocol::{PokemonRecord, parse_pokemon, pokemon_url};
use reqwest::StatusCode;

use super::{CreatureProvider, RetryPolicy};
use crate::config::ClientConfig;
use crate::error::DataUnavailable;

const USER_AGENT: &str = concat!("pokeduel/", env!("CARGO_PKG_VERSION"));

/// How a response status is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    NotFound,
    /// Server-side or rate-limit failure worth another attempt
    Retryable,
    Fatal,
}

pub fn classify_status(status: StatusCode) -> StatusClass {
    if status.is_success() {
        StatusClass::Success
    } else if status == StatusCode::NOT_FOUND {
        StatusClass::NotFound
    } else if status.is_server_error()
        || status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
    {
        StatusClass::Retryable
    } else {
        StatusClass::Fatal
    }
}

/// Outcome of a single HTTP attempt
enum Attempt {
    Body(String),
    NotFound,
    Retryable(String),
    Fatal(String),
}

/// Creature provider backed by the PokeAPI `pokemon` endpoint
pub struct PokeApiProvider {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl PokeApiProvider {
    pub fn new(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            retry: config.retry.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn attempt(&self, url: &str) -> Attempt {
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            // A malformed base URL fails the same way every time
            Err(e) if e.is_builder() => return Attempt::Fatal(e.to_string()),
            Err(e) => return Attempt::Retryable(e.to_string()),
        };

        let status = response.status();
        match classify_status(status) {
            StatusClass::Success => match response.text().await {
                Ok(body) => Attempt::Body(body),
                Err(e) => Attempt::Retryable(e.to_string()),
            },
            StatusClass::NotFound => Attempt::NotFound,
            StatusClass::Retryable => Attempt::Retryable(format!("HTTP {}", status)),
            StatusClass::Fatal => Attempt::Fatal(format!("HTTP {}", status)),
        }
    }

    /// Fetch and parse one record, retrying transient failures
    pub async fn fetch_record(&self, name: &str) -> Result<PokemonRecord, DataUnavailable> {
        let url = pokemon_url(&self.base_url, name);
        let mut delay = self.retry.initial_delay;
        let mut attempt = 1;

        loop {
            tracing::debug!(url = %url, attempt, "Requesting creature");

            match self.attempt(&url).await {
                Attempt::Body(body) => {
                    return parse_pokemon(&body).map_err(|source| DataUnavailable::Malformed {
                        name: name.to_string(),
                        source,
                    });
                }
                Attempt::NotFound => {
                    return Err(DataUnavailable::UnknownCreature(name.to_string()));
                }
                Attempt::Fatal(reason) => {
                    return Err(DataUnavailable::Provider {
                        name: name.to_string(),
                        reason,
                    });
                }
                Attempt::Retryable(reason) => {
                    if !self.retry.allows_retry(attempt) {
                        return Err(DataUnavailable::Provider {
                            name: name.to_string(),
                            reason: format!("{} (after {} attempts)", reason, attempt),
                        });
                    }

                    tracing::warn!(
                        attempt = attempt,
                        max_attempts = self.retry.max_attempts,
                        error = %reason,
                        "Lookup attempt failed"
                    );

                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    delay = self.retry.next_delay(delay);
                }
            }
        }
    }
}

#[async_trait]
impl CreatureProvider for PokeApiProvider {
    async fn fetch(&self, name: &str) -> Result<CreatureSnapshot, DataUnavailable> {
        let record = self.fetch_record(name).await?;
        CreatureSnapshot::from_protocol(&record).map_err(|source| DataUnavailable::Degenerate {
            name: name.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use pokeduel_battle::PredictError;
    use pokeduel_protocol::ParseError;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    const PIKACHU: &str = r#"{
        "name": "pikachu",
        "id": 25,
        "types": [{ "slot": 1, "type": { "name": "electric" } }],
        "stats": [
            { "base_stat": 35, "stat": { "name": "hp" } },
            { "base_stat": 90, "stat": { "name": "speed" } }
        ],
        "sprites": { "front_default": "https://example.test/25.png" },
        "cries": { "latest": null, "legacy": "https://example.test/25.ogg" }
    }"#;

    /// Serve the canned responses to successive connections on a loopback
    /// port. Returns the base URL and a counter of accepted connections.
    async fn serve(responses: Vec<(u16, &'static str)>) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.unwrap();
                counter.fetch_add(1, Ordering::SeqCst);

                // Drain the request head before answering
                let mut request: Vec<u8> = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => request.extend_from_slice(&buf[..n]),
                    }
                }

                let reason = StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .unwrap_or("Unknown");
                let reply = format!(
                    "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                socket.write_all(reply.as_bytes()).await.unwrap();
                let _ = socket.shutdown().await;
            }
        });

        (format!("http://{}/api/v2", addr), hits)
    }

    fn provider(api_url: String, max_attempts: usize) -> PokeApiProvider {
        let config = ClientConfig {
            api_url,
            timeout: Duration::from_secs(5),
            retry: RetryPolicy {
                max_attempts,
                initial_delay: Duration::from_millis(1),
                ..RetryPolicy::default()
            },
            ..ClientConfig::default()
        };
        PokeApiProvider::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let (url, hits) = serve(vec![(200, PIKACHU)]).await;

        let snapshot = provider(url, 3).fetch("pikachu").await.unwrap();

        assert_eq!(snapshot.name(), "pikachu");
        assert_eq!(snapshot.types().to_vec(), vec!["electric".to_string()]);
        assert_eq!(snapshot.stat_total(), 125);
        assert_eq!(snapshot.sprite_url(), Some("https://example.test/25.png"));
        assert_eq!(snapshot.cry_url(), Some("https://example.test/25.ogg"));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_unknown_creature() {
        let (url, hits) = serve(vec![(404, "Not Found")]).await;

        let err = provider(url, 3).fetch("agumon").await.unwrap_err();

        assert_eq!(err, DataUnavailable::UnknownCreature("agumon".to_string()));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_errors_retry_until_exhausted() {
        let (url, hits) = serve(vec![(503, ""), (503, "")]).await;

        let err = provider(url, 2).fetch("pikachu").await.unwrap_err();

        assert_eq!(
            err,
            DataUnavailable::Provider {
                name: "pikachu".to_string(),
                reason: "HTTP 503 Service Unavailable (after 2 attempts)".to_string(),
            }
        );
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_server_error_then_success() {
        let (url, hits) = serve(vec![(500, ""), (200, PIKACHU)]).await;

        let snapshot = provider(url, 3).fetch("pikachu").await.unwrap();

        assert_eq!(snapshot.name(), "pikachu");
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let (url, hits) = serve(vec![(400, "")]).await;

        let err = provider(url, 3).fetch("pikachu").await.unwrap_err();

        assert_eq!(
            err,
            DataUnavailable::Provider {
                name: "pikachu".to_string(),
                reason: "HTTP 400 Bad Request".to_string(),
            }
        );
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bad_json_is_malformed() {
        let (url, _) = serve(vec![(200, "<html>oops</html>")]).await;

        let err = provider(url, 3).fetch("pikachu").await.unwrap_err();

        match err {
            DataUnavailable::Malformed { name, source } => {
                assert_eq!(name, "pikachu");
                assert!(matches!(source, ParseError::InvalidFormat(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_stats_is_degenerate() {
        let body = r#"{ "name": "missingno", "types": [], "stats": [] }"#;
        let (url, _) = serve(vec![(200, body)]).await;

        let err = provider(url, 3).fetch("missingno").await.unwrap_err();

        assert_eq!(
            err,
            DataUnavailable::Degenerate {
                name: "missingno".to_string(),
                source: PredictError::EmptyStats,
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_not_retried() {
        let err = provider("not a url".to_string(), 3)
            .fetch("pikachu")
            .await
            .unwrap_err();

        match err {
            DataUnavailable::Provider { name, reason } => {
                assert_eq!(name, "pikachu");
                assert!(!reason.contains("attempts"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_status() {
        assert_eq!(classify_status(StatusCode::OK), StatusClass::Success);
        assert_eq!(classify_status(StatusCode::NOT_FOUND), StatusClass::NotFound);
        assert_eq!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE),
            StatusClass::Retryable
        );
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS),
            StatusClass::Retryable
        );
        assert_eq!(classify_status(StatusCode::BAD_REQUEST), StatusClass::Fatal);
        assert_eq!(classify_status(StatusCode::FORBIDDEN), StatusClass::Fatal);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_provider_failure() {
        // Nothing listens on port 9 of the loopback interface
        let config = ClientConfig {
            api_url: "http://127.0.0.1:9/api/v2".to_string(),
            timeout: Duration::from_secs(2),
            retry: RetryPolicy {
                max_attempts: 2,
                initial_delay: Duration::from_millis(1),
                ..RetryPolicy::default()
            },
            ..ClientConfig::default()
        };
        let provider = PokeApiProvider::new(&config).unwrap();

        let err = provider.fetch("pikachu").await.unwrap_err();
        match err {
            DataUnavailable::Provider { name, reason } => {
                assert_eq!(name, "pikachu");
                assert!(reason.contains("after 2 attempts"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
