use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use bookcabin_core::provider::{FlightProvider, ProviderError};
use bookcabin_core::timezone;
use bookcabin_domain::search::{
    AirlineInfo, DurationInfo, LocationInfo, PriceInfo, SearchCriteria, UnifiedFlight,
};

/// Garuda Indonesia adapter. Payload: `{status, flights: [...]}` with
/// RFC 3339 timestamps (`±HH:MM` offsets).
pub struct Garuda {
    data_path: PathBuf,
}

impl Garuda {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
        }
    }
}

#[derive(Deserialize)]
struct Payload {
    flights: Vec<Flight>,
}

#[derive(Deserialize)]
struct Flight {
    flight_id: String,
    airline: String,
    departure: Endpoint,
    arrival: Endpoint,
    price: Price,
    #[serde(default)]
    stops: u32,
    available_seats: u32,
    fare_class: String,
    #[serde(default)]
    amenities: Vec<String>,
}

#[derive(Deserialize)]
struct Endpoint {
    airport: String,
    city: String,
    time: String,
}

#[derive(Deserialize)]
struct Price {
    amount: f64,
}

#[async_trait]
impl FlightProvider for Garuda {
    fn name(&self) -> &'static str {
        "Garuda Indonesia"
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
        for flight in payload.flights {
            if flight.departure.airport != criteria.origin
                || flight.arrival.airport != criteria.destination
            {
                continue;
            }
            if !flight.fare_class.eq_ignore_ascii_case(&criteria.cabin_class) {
                continue;
            }

            let (Some(dep), Some(arr)) = (
                timezone::parse_offset_datetime(&flight.departure.time),
                timezone::parse_offset_datetime(&flight.arrival.time),
            ) else {
                warn!(
                    provider = self.name(),
                    flight = %flight.flight_id,
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
                    flight = %flight.flight_id,
                    "skipping row with arrival before departure"
                );
                continue;
            }

            results.push(UnifiedFlight {
                id: format!("{}_Garuda", flight.flight_id),
                provider: self.name().to_string(),
                airline: AirlineInfo {
                    name: flight.airline,
                    code: "GA".to_string(),
                },
                flight_number: flight.flight_id,
                departure: LocationInfo {
                    airport: flight.departure.airport,
                    city: flight.departure.city,
                    datetime: flight.departure.time,
                    timestamp: dep.timestamp(),
                },
                arrival: LocationInfo {
                    airport: flight.arrival.airport,
                    city: flight.arrival.city,
                    datetime: flight.arrival.time,
                    timestamp: arr.timestamp(),
                },
                duration: DurationInfo::from_minutes(minutes),
                stops: flight.stops,
                price: PriceInfo::idr(flight.price.amount),
                available_seats: flight.available_seats,
                cabin_class: flight.fare_class,
                amenities: flight.amenities,
                score: 0.0,
            });
        }
        Ok(results)
    }
}
