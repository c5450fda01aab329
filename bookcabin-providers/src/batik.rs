use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use bookcabin_core::provider::{FlightProvider, ProviderError};
use bookcabin_core::{airport, timezone};
use bookcabin_domain::search::{
    AirlineInfo, DurationInfo, LocationInfo, PriceInfo, SearchCriteria, UnifiedFlight,
};

/// Batik Air adapter. Payload: `{results: [...]}` with camelCase keys and
/// compact `±HHMM` offsets (no colon).
pub struct Batik {
    data_path: PathBuf,
}

impl Batik {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: path.into(),
        }
    }
}

#[derive(Deserialize)]
struct Payload {
    results: Vec<Row>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Row {
    flight_number: String,
    airline_name: String,
    origin: String,
    destination: String,
    departure_date_time: String,
    arrival_date_time: String,
    fare: Fare,
    seats_available: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Fare {
    total_price: f64,
    class: String,
}

#[async_trait]
impl FlightProvider for Batik {
    fn name(&self) -> &'static str {
        "Batik Air"
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
        for row in payload.results {
            if row.origin != criteria.origin || row.destination != criteria.destination {
                continue;
            }
            if !row.fare.class.eq_ignore_ascii_case(&criteria.cabin_class) {
                continue;
            }

            let (Some(dep), Some(arr)) = (
                timezone::parse_offset_datetime(&row.departure_date_time),
                timezone::parse_offset_datetime(&row.arrival_date_time),
            ) else {
                warn!(
                    provider = self.name(),
                    flight = %row.flight_number,
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
                    flight = %row.flight_number,
                    "skipping row with arrival before departure"
                );
                continue;
            }

            results.push(UnifiedFlight {
                id: format!("{}_Batik", row.flight_number),
                provider: self.name().to_string(),
                airline: AirlineInfo {
                    name: row.airline_name,
                    code: "ID".to_string(),
                },
                flight_number: row.flight_number,
                departure: LocationInfo {
                    airport: row.origin.clone(),
                    city: airport::city_name(&row.origin),
                    datetime: dep.to_rfc3339(),
                    timestamp: dep.timestamp(),
                },
                arrival: LocationInfo {
                    airport: row.destination.clone(),
                    city: airport::city_name(&row.destination),
                    datetime: arr.to_rfc3339(),
                    timestamp: arr.timestamp(),
                },
                duration: DurationInfo::from_minutes(minutes),
                stops: 0,
                price: PriceInfo::idr(row.fare.total_price),
                available_seats: row.seats_available,
                cabin_class: row.fare.class,
                amenities: vec![],
                score: 0.0,
            });
        }
        Ok(results)
    }
}
