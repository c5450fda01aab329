use std::time::Duration;

use axum::http::{header, Method};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod health;
pub mod response;
pub mod search;
pub mod state;

pub use state::AppState;

/// Assemble the full router: search + health routes under the ambient
/// middleware stack (CORS, request tracing, inbound timeout, panic recovery).
pub fn app(state: AppState, inbound_timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

    Router::new()
        .merge(health::routes())
        .merge(search::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(inbound_timeout))
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
