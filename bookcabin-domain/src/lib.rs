pub mod search;

pub use search::{
    AirlineInfo, DurationInfo, LocationInfo, Metadata, PriceInfo, SearchCriteria, SearchResponse,
    UnifiedFlight, ValidationError,
};
