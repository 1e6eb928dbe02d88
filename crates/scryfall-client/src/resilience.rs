//! Rate limiting and retry policy.

use std::sync::Arc;

use backon::ExponentialBuilder;
use tokio::sync::Semaphore;
use tokio::time::{sleep, Duration};

/// Client-wide rate limiter.
///
/// Limits throughput to a configurable number of requests per second by
/// combining a single-permit [`Semaphore`] with a fixed sleep interval.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    semaphore: Arc<Semaphore>,
    interval: Duration,
}

impl RateLimiter {
    /// Creates a new `RateLimiter` that allows at most
    /// `requests_per_second` requests per second. Zero is treated as one.
    pub fn new(requests_per_second: u32) -> Self {
        let rps = u64::from(requests_per_second.max(1));
        Self {
            semaphore: Arc::new(Semaphore::new(1)),
            interval: Duration::from_millis(1000 / rps),
        }
    }

    /// The spacing enforced between requests.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until a request slot is available, then holds the slot for
    /// the configured interval to enforce the rate limit.
    pub async fn acquire(&self) {
        // The semaphore is never closed; if it somehow were, fall back to
        // plain spacing.
        let _permit = self.semaphore.acquire().await.ok();
        sleep(self.interval).await;
    }
}

/// Exponential backoff used for transient failures: 200 ms doubling up to
/// 10 s, with jitter.
pub fn backoff(max_retries: usize) -> ExponentialBuilder {
    ExponentialBuilder::default()
        .with_min_delay(Duration::from_millis(200))
        .with_max_delay(Duration::from_secs(10))
        .with_max_times(max_retries)
        .with_jitter()
}
