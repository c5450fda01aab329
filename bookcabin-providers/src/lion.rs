use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use bookcabin_core::provider::{FlightProvider, ProviderError};
use bookcabin_core::{airport, timezone};
use bookcabin_domain::search::{
    AirlineInfo, DurationInfo, LocationInfo, PriceInfo, SearchCriteria, UnifiedFlight,
};

/// Lion Air adapter. Payload: `{data: {available_flights: [...]}}` with naive
/// local timestamps; each endpoint's zone is inferred from the airport table.
pub struct Lion {
    data_path: PathBuf,
}

impl Lion {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
        }
    }
}

#[derive(Deserialize)]
struct Payload {
    data: Data,
}

#[derive(Deserialize)]
struct Data {
    available_flights: Vec<Flight>,
}

#[derive(Deserialize)]
struct Flight {
    id: String,
    carrier: Carrier,
    route: Route,
    schedule: Schedule,
    pricing: Pricing,
    seats_left: u32,
}

#[derive(Deserialize)]
struct Carrier {
    name: String,
    iata: String,
}

#[derive(Deserialize)]
struct Route {
    from: Location,
    to: Location,
}

#[derive(Deserialize)]
struct Location {
    code: String,
    city: String,
}

#[derive(Deserialize)]
struct Schedule {
    departure: String,
    arrival: String,
}

#[derive(Deserialize)]
struct Pricing {
    total: f64,
}

#[async_trait]
impl FlightProvider for Lion {
    fn name(&self) -> &'static str {
        "Lion Air"
    }

    async fn search(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<UnifiedFlight>, ProviderError> {
        let raw = tokio::fs::read(&self.data_path)
            .await
            .map_err(|source| ProviderError::Io {
                provider: self.name(),
                source,
            })?;
        let payload: Payload =
            serde_json::from_slice(&raw).map_err(|source| ProviderError::Decode {
                provider: self.name(),
                source,
            })?;

        let mut results = Vec::new();
        for flight in payload.data.available_flights {
            if flight.route.from.code != criteria.origin
                || flight.route.to.code != criteria.destination
            {
                continue;
            }

            // The schedule carries no offsets; each endpoint's zone comes
            // from the airport table (unknown airports resolve to WIB).
            let dep_offset =
                timezone::offset_for_label(airport::detail(&flight.route.from.code).timezone);
            let arr_offset =
                timezone::offset_for_label(airport::detail(&flight.route.to.code).timezone);

            let (Some(dep), Some(arr)) = (
                timezone::parse_naive_in(&flight.schedule.departure, dep_offset),
                timezone::parse_naive_in(&flight.schedule.arrival, arr_offset),
            ) else {
                warn!(
                    provider = self.name(),
                    flight = %flight.id,
                    "skipping row with unparseable timestamps"
                );
                continue;
            };

            if dep.format("%Y-%m-%d").to_string() != criteria.departure_date {
                continue;
            }

            let minutes = (arr - dep).num_minutes();
            if minutes < 0 {
                warn!(
                    provider = self.name(),
                    flight = %flight.id,
                    "skipping row with arrival before departure"
                );
                continue;
            }

            results.push(UnifiedFlight {
                id: format!("{}_Lion", flight.id),
                provider: self.name().to_string(),
                airline: AirlineInfo {
                    name: flight.carrier.name,
                    code: flight.carrier.iata,
                },
                flight_number: flight.id,
                departure: LocationInfo {
                    airport: flight.route.from.code,
                    city: flight.route.from.city,
                    datetime: dep.to_rfc3339(),
                    timestamp: dep.timestamp(),
                },
                arrival: LocationInfo {
                    airport: flight.route.to.code,
                    city: flight.route.to.city,
                    datetime: arr.to_rfc3339(),
                    timestamp: arr.timestamp(),
                },
                duration: DurationInfo::from_minutes(minutes),
                stops: 0,
                price: PriceInfo::idr(flight.pricing.total),
                available_seats: flight.seats_left,
                cabin_class: "economy".to_string(),
                amenities: vec![],
                score: 0.0,
            });
        }
        Ok(results)
    }
}
