use std::time::Duration;

/// Exponential backoff for retrying failed lookups
#[derive(Clone, Debug, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first, at least 1
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(2),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Delay to wait after `current`, capped at `max_delay`
    pub fn next_delay(&self, current: Duration) -> Duration {
        Duration::from_secs_f64(current.as_secs_f64() * self.backoff_multiplier)
            .min(self.max_delay)
    }

    /// Whether another attempt is allowed after `attempt` (1-based) failed
    pub fn allows_retry(&self, attempt: usize) -> bool {
        attempt < self.max_attempts.max(1)
    }
}
