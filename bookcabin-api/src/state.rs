use std::sync::Arc;

use bookcabin_engine::FlightAggregator;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<FlightAggregator>,
}
