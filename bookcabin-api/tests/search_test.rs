use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use bookcabin_api::{app, AppState};
use bookcabin_core::provider::{FlightProvider, ProviderError};
use bookcabin_domain::search::{
    AirlineInfo, DurationInfo, LocationInfo, PriceInfo, SearchCriteria, UnifiedFlight,
};
use bookcabin_engine::FlightAggregator;

struct Stub;

#[async_trait]
impl FlightProvider for Stub {
    fn name(&self) -> &'static str {
        "Stub Air"
    }

    async fn search(
        &self,
        _criteria: &SearchCriteria,
    ) -> Result<Vec<UnifiedFlight>, ProviderError> {
        Ok(vec![UnifiedFlight {
            id: "ST100_Stub".to_string(),
            provider: "Stub Air".to_string(),
            airline: AirlineInfo {
                name: "Stub Air".to_string(),
                code: "ST".to_string(),
            },
            flight_number: "ST100".to_string(),
            departure: LocationInfo {
                airport: "CGK".to_string(),
                city: "Jakarta".to_string(),
                datetime: "2025-12-15T06:00:00+07:00".to_string(),
                timestamp: 1765753200,
            },
            arrival: LocationInfo {
                airport: "DPS".to_string(),
                city: "Denpasar".to_string(),
                datetime: "2025-12-15T09:30:00+08:00".to_string(),
                timestamp: 1765762200,
            },
            duration: DurationInfo::from_minutes(150),
            stops: 0,
            price: PriceInfo::idr(1_500_000.0),
            available_seats: 75,
            cabin_class: "economy".to_string(),
            amenities: vec![],
            score: 0.0,
        }])
    }
}

fn test_app() -> axum::Router {
    let aggregator = FlightAggregator::new(Duration::from_secs(5), vec![Arc::new(Stub)]);
    let state = AppState {
        aggregator: Arc::new(aggregator),
    };
    app(state, Duration::from_secs(5))
}

async fn post_search(body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/bookcabin/flight/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("request");

    let response = test_app().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("json body");
    (status, value)
}

#[tokio::test]
async fn search_returns_enveloped_results() {
    let body = json!({
        "origin": "CGK",
        "destination": "DPS",
        "departure_date": "2025-12-15",
        "passengers": 1,
        "cabin_class": "economy"
    });

    let (status, value) = post_search(Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["code"], 200);
    assert_eq!(value["error"]["status"], false);
    assert!(value["serverTime"].is_i64());

    let data = &value["data"];
    assert_eq!(data["metadata"]["total_results"], 1);
    assert_eq!(data["metadata"]["providers_queried"], 1);
    assert_eq!(data["metadata"]["providers_succeeded"], 1);
    assert_eq!(data["metadata"]["providers_failed"], 0);
    assert_eq!(data["flights"][0]["id"], "ST100_Stub");
    assert_eq!(data["flights"][0]["price"]["formatted"], "IDR 1.500.000");
    assert!(data["flights"][0].get("score").is_none());
    assert_eq!(data["search_criteria"]["origin"], "CGK");
}

#[tokio::test]
async fn same_endpoints_is_rejected_with_400() {
    let body = json!({
        "origin": "CGK",
        "destination": "CGK",
        "departure_date": "2025-12-15",
        "passengers": 1,
        "cabin_class": "economy"
    });

    let (status, value) = post_search(Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["code"], 400);
    assert_eq!(value["error"]["status"], true);
    assert!(value["error"]["msg"]
        .as_str()
        .expect("msg")
        .contains("origin and destination cannot be the same"));
}

#[tokio::test]
async fn empty_body_is_rejected_with_400() {
    let (status, value) = post_search(Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"]["status"], true);
}

#[tokio::test]
async fn malformed_criteria_is_rejected_with_400() {
    let body = json!({
        "origin": "CGK",
        "destination": "DPS",
        "departure_date": "15 December 2025",
        "passengers": 1,
        "cabin_class": "economy"
    });

    let (status, value) = post_search(Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"]["msg"]
        .as_str()
        .expect("msg")
        .contains("departure_date"));
}

#[tokio::test]
async fn lowercase_codes_are_normalised() {
    let body = json!({
        "origin": "cgk",
        "destination": "dps",
        "departure_date": "2025-12-15",
        "passengers": 1,
        "cabin_class": "ECONOMY"
    });

    let (status, value) = post_search(Body::from(body.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["data"]["search_criteria"]["origin"], "CGK");
    assert_eq!(value["data"]["search_criteria"]["destination"], "DPS");
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let request = Request::builder()
        .uri("/application/health")
        .body(Body::empty())
        .expect("request");

    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(value["status"]["application"], "OK");
}

#[tokio::test]
async fn root_describes_the_service() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request");

    let response = test_app().oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value: Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(value["name"], "bookcabin");
}
