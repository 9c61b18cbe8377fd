// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bounded retry policy for transient catalog-fetch failures.
//!
//! Timeouts retry a fixed number of times with increasing delay.
//! Rate-limiting waits a fixed delay before retrying. Anything else
//! aborts immediately and surfaces to the caller.

use std::future::Future;
use std::time::Duration;

/// How a catalog fetch attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchFailure {
    #[error("request timed out")]
    Timeout,

    #[error("rate limited by upstream")]
    RateLimited,

    #[error("upstream request failed: {0}")]
    Upstream(String),
}

/// Retry budget for one logical fetch.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retries after the first attempt (both timeout and rate-limit)
    pub max_retries: u32,
    /// Base delay after a timeout; grows linearly per attempt
    pub timeout_backoff: Duration,
    /// Fixed delay after a 429
    pub rate_limit_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            timeout_backoff: Duration::from_secs(1),
            rate_limit_delay: Duration::from_secs(2),
        }
    }
}

/// Run `op` under the retry policy until it succeeds, aborts, or the
/// budget is exhausted.
pub async fn fetch_with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, FetchFailure>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchFailure>>,
{
    let mut attempt: u32 = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(FetchFailure::Timeout) if attempt < policy.max_retries => {
                attempt += 1;
                let delay = policy.timeout_backoff * attempt;
                tracing::warn!(attempt, delay_ms = delay.as_millis() as u64, "Catalog fetch timed out, retrying");
                tokio::time::sleep(delay).await;
            }
            Err(FetchFailure::RateLimited) if attempt < policy.max_retries => {
                attempt += 1;
                tracing::warn!(attempt, "Catalog fetch rate limited, retrying after fixed delay");
                tokio::time::sleep(policy.rate_limit_delay).await;
            }
            Err(failure) => return Err(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn test_timeouts_retry_then_succeed() {
        let calls = Cell::new(0u32);

        let result = fetch_with_retry(&RetryPolicy::default(), || {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt < 3 {
                    Err(FetchFailure::Timeout)
                } else {
                    Ok("data")
                }
            }
        })
        .await;

        assert_eq!(result, Ok("data"));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_budget_exhausted() {
        let calls = Cell::new(0u32);

        let result: Result<(), _> = fetch_with_retry(&RetryPolicy::default(), || {
            calls.set(calls.get() + 1);
            async { Err(FetchFailure::Timeout) }
        })
        .await;

        assert_eq!(result, Err(FetchFailure::Timeout));
        // Initial attempt plus max_retries
        assert_eq!(calls.get(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_waits_then_retries() {
        let calls = Cell::new(0u32);

        let result = fetch_with_retry(&RetryPolicy::default(), || {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt == 1 {
                    Err(FetchFailure::RateLimited)
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result, Ok(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_errors_abort_immediately() {
        let calls = Cell::new(0u32);

        let result: Result<(), _> = fetch_with_retry(&RetryPolicy::default(), || {
            calls.set(calls.get() + 1);
            async { Err(FetchFailure::Upstream("HTTP 403".to_string())) }
        })
        .await;

        assert_eq!(result, Err(FetchFailure::Upstream("HTTP 403".to_string())));
        assert_eq!(calls.get(), 1);
    }
}
