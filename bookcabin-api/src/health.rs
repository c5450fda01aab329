use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/application/health", get(health))
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "bookcabin",
        "description": "Flight Search and Aggregation API",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "name": "bookcabin-api",
        "status": { "application": "OK" },
    }))
}
