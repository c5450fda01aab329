use std::cmp::Ordering;

use bookcabin_core::money;
use bookcabin_domain::search::UnifiedFlight;

const PRICE_WEIGHT: f64 = 0.7;
const DURATION_WEIGHT: f64 = 0.3;
const STOP_PENALTY: f64 = 0.5;
const PRICE_UNIT_IDR: f64 = 100_000.0;

/// Composite ranking key, lower is better: price in units of IDR 100.000,
/// duration in hours, and a flat penalty per stop.
pub fn score(flight: &UnifiedFlight) -> f64 {
    let price_factor = flight.price.amount / PRICE_UNIT_IDR;
    let duration_hours = flight.duration.total_minutes as f64 / 60.0;
    let stop_penalty = f64::from(flight.stops) * STOP_PENALTY;
    price_factor * PRICE_WEIGHT + duration_hours * DURATION_WEIGHT + stop_penalty
}

/// Score every flight, fill in the formatted price, and order by ascending
/// score. Exact ties fall back to provider, flight number, and departure
/// time, so the output order does not depend on which provider answered
/// first.
pub fn score_and_sort(flights: &mut [UnifiedFlight]) {
    for flight in flights.iter_mut() {
        flight.price.formatted = money::format_idr(flight.price.amount);
        flight.score = score(flight);
    }
    flights.sort_by(|a, b| {
        a.score
            .partial_cmp(&b.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.provider.cmp(&b.provider))
            .then_with(|| a.flight_number.cmp(&b.flight_number))
            .then_with(|| a.departure.timestamp.cmp(&b.departure.timestamp))
    });
}
