// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Retry utilities with exponential backoff for token store lookups.
//!
//! Only transient failures are retried. A missing key is a definitive
//! answer and is returned to the caller immediately, so retry delays never
//! penalize public projects.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::error::StoreError;

/// Configuration for retry behavior with exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (default: 3).
    pub max_attempts:     u32,
    /// Initial delay between attempts in milliseconds (default: 1000).
    pub initial_delay_ms: u64,
    /// Multiplier for exponential backoff (default: 2.0).
    pub backoff_factor:   f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts:     3,
            initial_delay_ms: 1000,
            backoff_factor:   2.0,
        }
    }
}

/// Executes an async store operation with exponential backoff retry logic.
///
/// # Arguments
///
/// * `config` - Retry configuration (max attempts, delays)
/// * `operation_name` - Name of the operation for logging
/// * `f` - Async function to retry
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] immediately without retrying, and the
/// last [`StoreError::Transport`] encountered once all attempts fail.
///
/// # Examples
///
/// ```no_run
/// use shipboard::{RetryConfig, StoreError, retry_with_backoff};
///
/// # async fn example() -> Result<(), StoreError> {
/// let config = RetryConfig::default();
/// let token = retry_with_backoff(&config, "token lookup", || async {
///     Ok::<_, StoreError>("secret".to_owned())
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    operation_name: &str,
    mut f: F,
) -> Result<T, StoreError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, StoreError>>,
{
    let mut attempt = 1;
    let mut delay_ms = config.initial_delay_ms;

    loop {
        match f().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(result);
            }
            Err(error) if !error.is_transient() => {
                return Err(error);
            }
            Err(error) => {
                if attempt >= config.max_attempts {
                    warn!(
                        "{} failed after {} attempts: {}",
                        operation_name, config.max_attempts, error
                    );
                    return Err(error);
                }

                warn!(
                    "{} failed on attempt {}/{}: {}. Retrying in {}ms...",
                    operation_name, attempt, config.max_attempts, error, delay_ms
                );

                sleep(Duration::from_millis(delay_ms)).await;
                delay_ms = (delay_ms as f64 * config.backoff_factor) as u64;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn retry_config_default_values() {
        let config = RetryConfig::default();
        assert_eq!(config.max_attempts, 3);
        assert_eq!(config.initial_delay_ms, 1000);
        assert_eq!(config.backoff_factor, 2.0);
    }

    #[test]
    fn retry_config_custom_values() {
        let config = RetryConfig {
            max_attempts:     5,
            initial_delay_ms: 500,
            backoff_factor:   1.5,
        };
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.initial_delay_ms, 500);
        assert_eq!(config.backoff_factor, 1.5);
    }

    #[tokio::test]
    async fn retry_succeeds_on_first_attempt() {
        let config = RetryConfig::default();
        let result = retry_with_backoff(&config, "test", || async {
            Ok::<_, StoreError>("token".to_owned())
        })
        .await
        .expect("should succeed");
        assert_eq!(result, "token");
    }

    #[tokio::test]
    async fn retry_succeeds_after_transient_failures() {
        let config = RetryConfig {
            max_attempts:     3,
            initial_delay_ms: 10,
            backoff_factor:   2.0,
        };
        let counter = Arc::new(Mutex::new(0));
        let counter_clone = counter.clone();

        let result = retry_with_backoff(&config, "test", move || {
            let counter = counter_clone.clone();
            async move {
                let mut count = counter.lock().unwrap();
                *count += 1;
                if *count < 3 {
                    Err(StoreError::transport("temporary failure"))
                } else {
                    Ok("token".to_owned())
                }
            }
        })
        .await
        .expect("should succeed after retries");

        assert_eq!(result, "token");
        assert_eq!(*counter.lock().unwrap(), 3);
    }

    #[tokio::test]
    async fn retry_fails_after_max_attempts() {
        let config = RetryConfig {
            max_attempts:     2,
            initial_delay_ms: 10,
            backoff_factor:   2.0,
        };
        let counter = Arc::new(Mutex::new(0));
        let counter_clone = counter.clone();

        let result = retry_with_backoff(&config, "test", move || {
            let counter = counter_clone.clone();
            async move {
                let mut count = counter.lock().unwrap();
                *count += 1;
                Err::<String, _>(StoreError::transport("persistent failure"))
            }
        })
        .await;

        assert!(result.is_err(), "should fail after max attempts");
        assert_eq!(*counter.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn retry_does_not_retry_missing_keys() {
        let config = RetryConfig {
            max_attempts:     3,
            initial_delay_ms: 10,
            backoff_factor:   2.0,
        };
        let counter = Arc::new(Mutex::new(0));
        let counter_clone = counter.clone();

        let error = retry_with_backoff(&config, "test", move || {
            let counter = counter_clone.clone();
            async move {
                let mut count = counter.lock().unwrap();
                *count += 1;
                Err::<String, _>(StoreError::not_found("/projects/api/travis_token"))
            }
        })
        .await
        .expect_err("missing keys should surface immediately");

        assert!(matches!(error, StoreError::NotFound { .. }));
        assert_eq!(*counter.lock().unwrap(), 1);
    }
}
