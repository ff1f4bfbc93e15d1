/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS};
use std::time::Duration;

/// Retry behaviour for connection failures
///
/// HTTP error statuses are never retried; only failures of the underlying
/// transport are. A request is attempted at most `max_retries + 1` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Number of retries after the first attempt
    pub max_retries: u32,
    /// Base delay between attempts
    pub delay: Duration,
    /// Doubles the delay after every failed attempt when true
    pub exponential_backoff: bool,
}

impl RetryPolicy {
    /// Creates a new retry policy
    #[must_use]
    pub fn new(max_retries: u32, delay: Duration, exponential_backoff: bool) -> Self {
        Self {
            max_retries,
            delay,
            exponential_backoff,
        }
    }

    /// Creates a policy that never retries
    #[must_use]
    pub fn no_retries() -> Self {
        Self::new(0, Duration::ZERO, false)
    }

    /// Total number of attempts, the first one included
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Wait before the retry that follows failed attempt number `attempt` (1-based)
    ///
    /// Exponential mode waits `delay * 2^(attempt - 1)`, flat mode always waits `delay`.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if !self.exponential_backoff {
            return self.delay;
        }
        let factor = 2u32.checked_pow(attempt.saturating_sub(1)).unwrap_or(u32::MAX);
        self.delay.saturating_mul(factor)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_RETRIES,
            Duration::from_secs(DEFAULT_RETRY_DELAY_SECS),
            true,
        )
    }
}
