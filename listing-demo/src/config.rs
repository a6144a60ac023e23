//! Adapter configuration.

use std::time::Duration;

/// Retry policy for transient fetch failures.
///
/// The delay doubles after every failed attempt, capped at `max_delay`.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use listing_demo::RetryConfig;
///
/// let retry = RetryConfig::default()
///     .max_retries(5)
///     .initial_delay(Duration::from_millis(100));
/// assert_eq!(retry.delay_for(2), Duration::from_millis(400));
///
/// let none = RetryConfig::no_retry();
/// assert_eq!(none.max_retries, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Attempts after the first one.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    pub fn no_retry() -> Self {
        Self {
            max_retries: 0,
            ..Default::default()
        }
    }

    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = n;
        self
    }

    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Wait before retry number `attempt` (zero-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.initial_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

/// Settings for the mock source and the query client in front of it.
#[derive(Debug, Clone, PartialEq)]
pub struct AdapterConfig {
    /// Simulated round trip of each fetch.
    ///
    /// Default: 500 ms
    pub latency: Duration,

    /// Chance in `[0, 1]` that a fetch fails with a transient error.
    ///
    /// Default: 0
    pub failure_rate: f64,

    /// How long a loaded page is served from the cache.
    ///
    /// Default: 5 minutes
    pub cache_ttl: Duration,

    pub retry: RetryConfig,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(500),
            failure_rate: 0.0,
            cache_ttl: Duration::from_secs(300),
            retry: RetryConfig::default(),
        }
    }
}

impl AdapterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Clamped into `[0, 1]`.
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// No latency, no failures, no retries. For tests.
    pub fn instant() -> Self {
        Self {
            latency: Duration::ZERO,
            failure_rate: 0.0,
            cache_ttl: Duration::from_secs(300),
            retry: RetryConfig::no_retry(),
        }
    }
}
