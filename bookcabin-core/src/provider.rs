use async_trait::async_trait;
use thiserror::Error;

use bookcabin_domain::search::{SearchCriteria, UnifiedFlight};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} payload read: {source}")]
    Io {
        provider: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("{provider} payload decode: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("provider deadline exceeded")]
    DeadlineExceeded,
}

/// Contract every flight-data source implements. The engine never branches
/// on a concrete provider; it only sees this trait.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Stable identity, used in row IDs and telemetry.
    fn name(&self) -> &'static str;

    /// Load this provider's listings, keep the rows matching `criteria`
    /// (route, local departure date, cabin class when the payload reports
    /// one), and normalise them to [`UnifiedFlight`].
    ///
    /// Scoring, sorting, retries, and timeouts are the engine's job.
    /// Cancellation is expressed by dropping the returned future; every I/O
    /// boundary is an await point. A single malformed row is skipped, not
    /// surfaced as an error.
    async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<UnifiedFlight>, ProviderError>;
}
