use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("origin must be a 3-letter airport code")]
    BadOrigin,
    #[error("destination must be a 3-letter airport code")]
    BadDestination,
    #[error("departure_date must be a calendar date formatted as YYYY-MM-DD")]
    BadDepartureDate,
    #[error("return_date must be a calendar date formatted as YYYY-MM-DD")]
    BadReturnDate,
    #[error("passengers must be at least 1")]
    NoPassengers,
    #[error("cabin_class must not be empty")]
    EmptyCabinClass,
}

/// Trip intent as received from the client. Immutable during a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub passengers: u32,
    pub cabin_class: String,
}

impl SearchCriteria {
    /// Copy with trimmed fields, uppercased airport codes, and an empty
    /// `return_date` collapsed to `None`.
    pub fn normalized(&self) -> Self {
        Self {
            origin: self.origin.trim().to_ascii_uppercase(),
            destination: self.destination.trim().to_ascii_uppercase(),
            departure_date: self.departure_date.trim().to_string(),
            return_date: self
                .return_date
                .as_deref()
                .map(|date| date.trim().to_string())
                .filter(|date| !date.is_empty()),
            passengers: self.passengers,
            cabin_class: self.cabin_class.trim().to_string(),
        }
    }

    /// Field-level validation. Expects `normalized()` input; the
    /// same-endpoint check is the aggregator's job.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_airport_code(&self.origin) {
            return Err(ValidationError::BadOrigin);
        }
        if !is_airport_code(&self.destination) {
            return Err(ValidationError::BadDestination);
        }
        if NaiveDate::parse_from_str(&self.departure_date, DATE_FORMAT).is_err() {
            return Err(ValidationError::BadDepartureDate);
        }
        if let Some(return_date) = &self.return_date {
            if NaiveDate::parse_from_str(return_date, DATE_FORMAT).is_err() {
                return Err(ValidationError::BadReturnDate);
            }
        }
        if self.passengers == 0 {
            return Err(ValidationError::NoPassengers);
        }
        if self.cabin_class.is_empty() {
            return Err(ValidationError::EmptyCabinClass);
        }
        Ok(())
    }

    /// Criteria for the inbound leg of a round trip: endpoints swapped,
    /// departing on the return date. `return_date` is cleared so the leg
    /// cannot recurse. `None` for one-way trips.
    pub fn return_leg(&self) -> Option<Self> {
        let departure_date = self.return_date.clone()?;
        Some(Self {
            origin: self.destination.clone(),
            destination: self.origin.clone(),
            departure_date,
            return_date: None,
            passengers: self.passengers,
            cabin_class: self.cabin_class.clone(),
        })
    }
}

fn is_airport_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// One normalised flight row, identical in shape across providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedFlight {
    pub id: String,
    pub provider: String,
    pub airline: AirlineInfo,
    pub flight_number: String,
    pub departure: LocationInfo,
    pub arrival: LocationInfo,
    pub duration: DurationInfo,
    pub stops: u32,
    pub price: PriceInfo,
    pub available_seats: u32,
    pub cabin_class: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Ranking key, lower is better. Internal only.
    #[serde(skip)]
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineInfo {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub airport: String,
    pub city: String,
    pub datetime: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationInfo {
    pub total_minutes: i64,
    pub formatted: String,
}

impl DurationInfo {
    pub fn from_minutes(total_minutes: i64) -> Self {
        Self {
            total_minutes,
            formatted: format!("{}h {}m", total_minutes / 60, total_minutes % 60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub amount: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub formatted: String,
}

impl PriceInfo {
    pub fn idr(amount: f64) -> Self {
        Self {
            amount,
            currency: "IDR".to_string(),
            formatted: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub total_results: usize,
    pub providers_queried: usize,
    pub providers_succeeded: usize,
    pub providers_failed: usize,
    pub search_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "search_criteria")]
    pub criteria: SearchCriteria,
    pub metadata: Metadata,
    pub flights: Vec<UnifiedFlight>,
    pub return_flights: Vec<UnifiedFlight>,
}
