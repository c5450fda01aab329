use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{error, info};

use bookcabin_core::provider::{FlightProvider, ProviderError};
use bookcabin_domain::search::{Metadata, SearchCriteria, SearchResponse, UnifiedFlight};

use crate::retry;
use crate::scorer;

const MAX_JITTER_MS: u64 = 50;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("origin and destination cannot be the same")]
    SameEndpoints,
}

/// Per-fan-out provider telemetry.
#[derive(Debug, Default, Clone, Copy)]
struct FanoutMeta {
    succeeded: usize,
    failed: usize,
}

/// Fans a search out to every registered provider under a shared deadline and
/// merges the results. Providers are read-only after construction; each
/// fan-out owns its own channels and deadline.
pub struct FlightAggregator {
    providers: Vec<Arc<dyn FlightProvider>>,
    timeout: Duration,
}

impl FlightAggregator {
    pub fn new(timeout: Duration, providers: Vec<Arc<dyn FlightProvider>>) -> Self {
        Self { providers, timeout }
    }

    /// Run the outbound fan-out, and for round trips the inbound one, then
    /// assemble the combined response. Provider failures are telemetry, not
    /// errors; the only rejection is a same-endpoint trip.
    pub async fn search_all(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<SearchResponse, SearchError> {
        let started = std::time::Instant::now();

        if criteria.origin == criteria.destination {
            return Err(SearchError::SameEndpoints);
        }

        info!(
            "searching depart leg: {} -> {} on {}",
            criteria.origin, criteria.destination, criteria.departure_date
        );
        let (flights, depart_meta) = self.execute_search(criteria).await;

        let mut return_flights = Vec::new();
        let mut return_meta = FanoutMeta::default();
        if let Some(inbound) = criteria.return_leg() {
            info!(
                "searching return leg: {} -> {} on {}",
                inbound.origin, inbound.destination, inbound.departure_date
            );
            (return_flights, return_meta) = self.execute_search(&inbound).await;
        }

        let providers_queried = if criteria.return_date.is_some() {
            self.providers.len() * 2
        } else {
            self.providers.len()
        };

        let metadata = Metadata {
            total_results: flights.len() + return_flights.len(),
            providers_queried,
            providers_succeeded: depart_meta.succeeded + return_meta.succeeded,
            providers_failed: depart_meta.failed + return_meta.failed,
            search_time_ms: started.elapsed().as_millis() as u64,
        };

        Ok(SearchResponse {
            criteria: criteria.clone(),
            metadata,
            flights,
            return_flights,
        })
    }

    /// One fan-out: a task per provider, each wrapped in jitter + retry and
    /// bounded by the shared deadline. Results and errors come back over
    /// channels sized to the provider count; the channels closing (every
    /// sender dropped) is the completion barrier. Never fails; partial
    /// results are a success.
    async fn execute_search(
        &self,
        criteria: &SearchCriteria,
    ) -> (Vec<UnifiedFlight>, FanoutMeta) {
        let deadline = Instant::now() + self.timeout;
        let capacity = self.providers.len().max(1);
        let (result_tx, mut result_rx) = mpsc::channel::<Vec<UnifiedFlight>>(capacity);
        let (error_tx, mut error_rx) = mpsc::channel::<ProviderError>(capacity);

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let criteria = criteria.clone();
            let result_tx = result_tx.clone();
            let error_tx = error_tx.clone();

            tokio::spawn(async move {
                let outcome = tokio::time::timeout_at(deadline, async {
                    let jitter = rand::rng().random_range(0..=MAX_JITTER_MS);
                    tokio::time::sleep(Duration::from_millis(jitter)).await;
                    retry::search_with_retry(provider.as_ref(), &criteria).await
                })
                .await;

                match outcome {
                    Ok(Ok(flights)) => {
                        let _ = result_tx.send(flights).await;
                    }
                    Ok(Err(err)) => {
                        error!("provider {} failed: {err}", provider.name());
                        let _ = error_tx.send(err).await;
                    }
                    Err(_elapsed) => {
                        error!("provider {} hit the fan-out deadline", provider.name());
                        let _ = error_tx.send(ProviderError::DeadlineExceeded).await;
                    }
                }
            });
        }
        drop(result_tx);
        drop(error_tx);

        let mut all_flights = Vec::new();
        let mut meta = FanoutMeta::default();
        while let Some(flights) = result_rx.recv().await {
            all_flights.extend(flights);
            meta.succeeded += 1;
        }
        while error_rx.recv().await.is_some() {
            meta.failed += 1;
        }

        scorer::score_and_sort(&mut all_flights);
        (all_flights, meta)
    }
}
