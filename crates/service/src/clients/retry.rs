use std::time::Duration;

use common::observability::UPSTREAM_RETRIES_TOTAL;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Delay schedule between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// `base * 2^(n-1)` before retry n, capped.
    Exponential { base: Duration, cap: Duration },
    /// `step * n` before retry n.
    Linear { step: Duration },
}

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Backoff,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self { max_attempts: max_attempts.max(1), backoff }
    }

    /// Catalog gRPC policy: 4 total attempts, backoff starting at 1s and
    /// doubling up to a 5s ceiling.
    pub fn rpc_default() -> Self {
        Self::new(
            4,
            Backoff::Exponential { base: Duration::from_secs(1), cap: Duration::from_secs(5) },
        )
    }

    /// HTTP backend policy: 3 total attempts, backoff growing by 1s per
    /// attempt.
    pub fn http_default() -> Self {
        Self::new(3, Backoff::Linear { step: Duration::from_secs(1) })
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Pause taken before retry `attempt` (1-based: the delay after the
    /// first failure is `delay_for(1)`).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let attempt = attempt.max(1);
        match self.backoff {
            Backoff::Exponential { base, cap } => {
                let factor = 1u32 << (attempt - 1).min(16);
                base.saturating_mul(factor).min(cap)
            }
            Backoff::Linear { step } => step.saturating_mul(attempt),
        }
    }

    async fn wait_before_retry(&self, attempt: u32) {
        let delay = self.delay_for(attempt);
        debug!(?delay, attempt, "backing off before retry");
        sleep(delay).await;
    }
}

/// Drive `op` under `policy`, retrying only while `is_transient` says the
/// failure is worth another attempt. Classification runs on the raw
/// transport error; normalization into `ServiceError` happens in the adapter
/// after the loop gives up or succeeds.
pub async fn retry_with_policy<F, Fut, T, E, P>(
    policy: &RetryPolicy,
    mut op: F,
    mut is_transient: P,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    P: FnMut(&E) -> bool,
{
    let mut attempt = 1u32;
    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "upstream call succeeded after retries");
                }
                return Ok(value);
            }
            Err(error) => {
                if attempt >= policy.max_attempts() || !is_transient(&error) {
                    return Err(error);
                }
                warn!(attempt, error = %error, "transient upstream failure; retrying");
                UPSTREAM_RETRIES_TOTAL.inc();
                policy.wait_before_retry(attempt).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Backoff::Linear { step: Duration::from_millis(1) })
    }

    #[tokio::test]
    async fn success_on_first_try_makes_one_attempt() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result = retry_with_policy(
            &fast_policy(3),
            || {
                let c = c.clone();
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, String>(42)
                }
            },
            |_| true,
        )
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn recovers_after_transient_failures() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result = retry_with_policy(
            &fast_policy(3),
            || {
                let c = c.clone();
                async move {
                    if c.fetch_add(1, Ordering::SeqCst) < 2 {
                        Err("temporary failure".to_string())
                    } else {
                        Ok(42)
                    }
                }
            },
            |_| true,
        )
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn exhausts_attempts_and_returns_last_error() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result: Result<i32, String> = retry_with_policy(
            &fast_policy(2),
            || {
                let c = c.clone();
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Err("always fails".to_string())
                }
            },
            |_| true,
        )
        .await;
        assert_eq!(result.unwrap_err(), "always fails");
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_transient_errors_do_not_retry() {
        let counter = Arc::new(AtomicU32::new(0));
        let c = counter.clone();
        let result: Result<i32, String> = retry_with_policy(
            &fast_policy(4),
            || {
                let c = c.clone();
                async move {
                    c.fetch_add(1, Ordering::SeqCst);
                    Err("not found".to_string())
                }
            },
            |_| false,
        )
        .await;
        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn exponential_backoff_doubles_to_ceiling() {
        let policy = RetryPolicy::rpc_default();
        assert_eq!(policy.delay_for(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for(2), Duration::from_secs(2));
        assert_eq!(policy.delay_for(3), Duration::from_secs(4));
        assert_eq!(policy.delay_for(4), Duration::from_secs(5));
        assert_eq!(policy.delay_for(10), Duration::from_secs(5));
    }

    #[test]
    fn linear_backoff_grows_by_step() {
        let policy = RetryPolicy::http_default();
        assert_eq!(policy.delay_for(1), Duration::from_secs(1));
        assert_eq!(policy.delay_for(2), Duration::from_secs(2));
        assert_eq!(policy.max_attempts(), 3);
    }

    #[test]
    fn zero_attempts_clamped_to_one() {
        let policy = fast_policy(0);
        assert_eq!(policy.max_attempts(), 1);
    }
}
