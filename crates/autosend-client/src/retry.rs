//! Retry policy with exponential backoff.

use rand::Rng;
use std::time::Duration;

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Backoff strategy to use.
    pub backoff: BackoffStrategy,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(300),
            backoff: BackoffStrategy::Exponential { factor: 2.0 },
        }
    }
}

impl RetryConfig {
    /// Set the maximum number of attempts (first attempt included).
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the delay before the first retry.
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay between retries.
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the backoff strategy.
    pub fn with_backoff(mut self, backoff: BackoffStrategy) -> Self {
        self.backoff = backoff;
        self
    }

    /// A single attempt, never retried.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }
}

/// Backoff strategy for determining retry delays.
#[derive(Debug, Clone, Copy)]
pub enum BackoffStrategy {
    /// Constant delay between retries.
    Constant,
    /// Linear increase in delay (delay * (retry + 1)).
    Linear,
    /// Exponential increase in delay (delay * factor^retry).
    Exponential { factor: f64 },
    /// Exponential with random jitter to avoid thundering herd.
    ExponentialWithJitter { factor: f64 },
}

impl BackoffStrategy {
    /// Calculate the delay before retry number `retry` (0-indexed).
    pub fn delay(&self, retry: u32, initial_delay: Duration, max_delay: Duration) -> Duration {
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        let delay = match self {
            BackoffStrategy::Constant => initial_delay,
            BackoffStrategy::Linear => initial_delay.saturating_mul(retry.saturating_add(1)),
            BackoffStrategy::Exponential { factor } => {
                scaled(initial_delay, factor.powi(exponent), max_delay)
            }
            BackoffStrategy::ExponentialWithJitter { factor } => {
                let base = scaled(initial_delay, factor.powi(exponent), max_delay);

                // Jitter: random value between 0 and the base delay
                let jitter = rand::rng().random::<f64>();
                base.saturating_add(scaled(base, jitter, max_delay))
            }
        };

        std::cmp::min(delay, max_delay)
    }
}

fn scaled(delay: Duration, multiplier: f64, ceiling: Duration) -> Duration {
    Duration::try_from_secs_f64(delay.as_secs_f64() * multiplier).unwrap_or(ceiling)
}

/// Tracks attempts for a single request and hands out backoff delays.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
    attempt: u32,
}

impl RetryPolicy {
    /// Create a new retry policy from config.
    pub fn new(config: RetryConfig) -> Self {
        Self { config, attempt: 0 }
    }

    /// Total attempts allowed. Always at least one.
    pub fn max_attempts(&self) -> u32 {
        self.config.max_attempts.max(1)
    }

    /// The attempt currently in flight (1-indexed), or 0 before the first one.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Record the start of a new attempt and return its number (1-indexed).
    pub fn start_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.attempt
    }

    /// Returns true if another attempt is allowed after the current one.
    pub fn should_retry(&self) -> bool {
        self.attempt < self.max_attempts()
    }

    /// The delay to wait before the next attempt, or `None` if attempts are exhausted.
    pub fn next_delay(&self) -> Option<Duration> {
        if !self.should_retry() {
            return None;
        }

        let retry = self.attempt.saturating_sub(1);
        Some(
            self.config
                .backoff
                .delay(retry, self.config.initial_delay, self.config.max_delay),
        )
    }
}
