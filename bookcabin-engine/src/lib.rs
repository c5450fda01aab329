//! The aggregation engine: per-provider retry, concurrent fan-out under a
//! shared deadline, composite scoring, and trip orchestration.

pub mod aggregator;
pub mod retry;
pub mod scorer;

pub use aggregator::{FlightAggregator, SearchError};
