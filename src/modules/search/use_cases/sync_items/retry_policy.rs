// Fixed delay retry around a single fetch.
//
// Responsibilities
// - Re-run the operation after `delay` while its failure is retryable.
// - Stop at the first permanent failure, or at `max_attempts` when a ceiling is configured.
//
// There is no backoff. Without a ceiling the policy waits for the source forever.

use crate::modules::search::use_cases::sync_items::source_port::FetchError;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RetryError {
    #[error("permanent fetch failure: {0}")]
    Permanent(FetchError),

    #[error("gave up after {attempts} attempts, last failure: {last}")]
    Exhausted { attempts: u32, last: FetchError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: DEFAULT_RETRY_DELAY,
            max_attempts: None,
        }
    }
}

impl RetryPolicy {
    pub fn new(delay: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            delay,
            max_attempts,
        }
    }

    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, RetryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            let error = match operation().await {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            let class = error.class();
            if !class.is_retryable() {
                tracing::warn!(error = %error, attempts, "fetch failed permanently");
                return Err(RetryError::Permanent(error));
            }
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(RetryError::Exhausted {
                    attempts,
                    last: error,
                });
            }

            tracing::warn!(
                error = %error,
                class = ?class,
                attempts,
                retry_in_ms = self.delay.as_millis() as u64,
                "fetch failed, retrying"
            );
            tokio::time::sleep(self.delay).await;
        }
    }
}
