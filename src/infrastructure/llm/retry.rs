use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::LlmClientError;

/// Bounds for the rate-limit retry loop.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub backoff_multiplier: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(5),
            backoff_multiplier: 2,
        }
    }
}

/// Suspension point between attempts. Injected so tests can observe the
/// backoff sequence without waiting on the wall clock.
#[async_trait]
pub trait Sleep: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioSleep;

#[async_trait]
impl Sleep for TokioSleep {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// The backoff delays remaining for one call, derived from a [`RetryPolicy`].
#[derive(Debug)]
pub struct BackoffSchedule {
    delay: Duration,
    multiplier: u32,
    remaining: u32,
}

impl BackoffSchedule {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            delay: policy.initial_delay,
            multiplier: policy.backoff_multiplier,
            remaining: policy.max_attempts.saturating_sub(1),
        }
    }

    /// Next delay to wait before another attempt, or `None` once the attempt
    /// budget is spent.
    pub fn next_delay(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.delay;
        self.delay *= self.multiplier;
        Some(current)
    }
}

/// Runs `attempt`, retrying on [`LlmClientError::RateLimited`] with the
/// policy's backoff sequence. Any other error aborts immediately. Exhausting
/// the budget on rate limits yields [`LlmClientError::Overloaded`] instead of
/// the raw provider error.
pub async fn retry_rate_limited<T, F, Fut>(
    policy: RetryPolicy,
    sleep: &dyn Sleep,
    mut attempt: F,
) -> Result<T, LlmClientError>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = Result<T, LlmClientError>> + Send,
    T: Send,
{
    let mut schedule = BackoffSchedule::new(policy);

    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(LlmClientError::RateLimited(detail)) => match schedule.next_delay() {
                Some(delay) => {
                    tracing::warn!(
                        delay_secs = delay.as_secs(),
                        detail = %detail,
                        "rate limited, backing off"
                    );
                    sleep.sleep(delay).await;
                }
                None => {
                    tracing::warn!(detail = %detail, "rate limit retries exhausted");
                    return Err(LlmClientError::Overloaded);
                }
            },
            Err(other) => return Err(other),
        }
    }
}
