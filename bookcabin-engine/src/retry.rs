use std::time::Duration;

use tracing::debug;

use bookcabin_core::provider::{FlightProvider, ProviderError};
use bookcabin_domain::search::{SearchCriteria, UnifiedFlight};

pub(crate) const MAX_ATTEMPTS: u32 = 3;
pub(crate) const BASE_DELAY: Duration = Duration::from_millis(100);

/// Run one provider search with bounded retries and exponential backoff
/// (100 ms, then 200 ms; no wait after the final attempt). Every error is
/// retried; classification is not this layer's job. The fan-out deadline
/// cancels the loop by dropping this future at any await point, including
/// mid-backoff.
pub async fn search_with_retry(
    provider: &dyn FlightProvider,
    criteria: &SearchCriteria,
) -> Result<Vec<UnifiedFlight>, ProviderError> {
    let mut attempt = 0;
    loop {
        match provider.search(criteria).await {
            Ok(flights) => return Ok(flights),
            Err(err) => {
                attempt += 1;
                if attempt >= MAX_ATTEMPTS {
                    return Err(err);
                }
                let delay = BASE_DELAY * 2u32.pow(attempt - 1);
                debug!(
                    provider = provider.name(),
                    attempt,
                    error = %err,
                    "provider search failed, backing off"
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    struct Flaky {
        failures_before_success: u32,
        calls: AtomicU32,
    }

    #[async_trait]
    impl FlightProvider for Flaky {
        fn name(&self) -> &'static str {
            "Flaky"
        }

        async fn search(
            &self,
            _criteria: &SearchCriteria,
        ) -> Result<Vec<UnifiedFlight>, ProviderError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures_before_success {
                Err(ProviderError::Io {
                    provider: self.name(),
                    source: std::io::Error::other("boom"),
                })
            } else {
                Ok(vec![])
            }
        }
    }

    fn criteria() -> SearchCriteria {
        SearchCriteria {
            origin: "CGK".to_string(),
            destination: "DPS".to_string(),
            departure_date: "2025-12-15".to_string(),
            return_date: None,
            passengers: 1,
            cabin_class: "economy".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_transient_failures() {
        let provider = Flaky {
            failures_before_success: 2,
            calls: AtomicU32::new(0),
        };

        let result = search_with_retry(&provider, &criteria()).await;
        assert!(result.is_ok());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_three_attempts() {
        let provider = Flaky {
            failures_before_success: u32::MAX,
            calls: AtomicU32::new(0),
        };

        let result = search_with_retry(&provider, &criteria()).await;
        assert!(result.is_err());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn first_success_needs_no_retry() {
        let provider = Flaky {
            failures_before_success: 0,
            calls: AtomicU32::new(0),
        };

        search_with_retry(&provider, &criteria())
            .await
            .expect("success");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }
}
