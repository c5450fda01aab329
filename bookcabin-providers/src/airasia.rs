use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use bookcabin_core::provider::{FlightProvider, ProviderError};
use bookcabin_core::{airport, timezone};
use bookcabin_domain::search::{
    AirlineInfo, DurationInfo, LocationInfo, PriceInfo, SearchCriteria, UnifiedFlight,
};

/// AirAsia adapter. Payload: flat `{flights: [...]}` rows with RFC 3339
/// timestamps and a `direct_flight` flag instead of a stop count.
pub struct AirAsia {
    data_path: PathBuf,
}

impl AirAsia {
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
    flight_code: String,
    airline: String,
    from_airport: String,
    to_airport: String,
    depart_time: String,
    arrive_time: String,
    price_idr: f64,
    direct_flight: bool,
    seats: u32,
    cabin_class: String,
}

#[async_trait]
impl FlightProvider for AirAsia {
    fn name(&self) -> &'static str {
        "AirAsia"
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
            if flight.from_airport != criteria.origin || flight.to_airport != criteria.destination
            {
                continue;
            }
            if !flight.cabin_class.eq_ignore_ascii_case(&criteria.cabin_class) {
                continue;
            }

            let (Some(dep), Some(arr)) = (
                timezone::parse_offset_datetime(&flight.depart_time),
                timezone::parse_offset_datetime(&flight.arrive_time),
            ) else {
                warn!(
                    provider = self.name(),
                    flight = %flight.flight_code,
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
                    flight = %flight.flight_code,
                    "skipping row with arrival before departure"
                );
                continue;
            }

            let stops = if flight.direct_flight { 0 } else { 1 };

            results.push(UnifiedFlight {
                id: format!("{}_AirAsia", flight.flight_code),
                provider: self.name().to_string(),
                airline: AirlineInfo {
                    name: flight.airline,
                    code: "QZ".to_string(),
                },
                flight_number: flight.flight_code,
                departure: LocationInfo {
                    airport: flight.from_airport.clone(),
                    city: airport::city_name(&flight.from_airport),
                    datetime: flight.depart_time,
                    timestamp: dep.timestamp(),
                },
                arrival: LocationInfo {
                    airport: flight.to_airport.clone(),
                    city: airport::city_name(&flight.to_airport),
                    datetime: flight.arrive_time,
                    timestamp: arr.timestamp(),
                },
                duration: DurationInfo::from_minutes(minutes),
                stops,
                price: PriceInfo::idr(flight.price_idr),
                available_seats: flight.seats,
                cabin_class: flight.cabin_class,
                amenities: vec![],
                score: 0.0,
            });
        }
        Ok(results)
    }
}
