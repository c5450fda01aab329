use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tracing::warn;

use bookcabin_domain::search::SearchCriteria;

use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/bookcabin/flight/search", post(search_flights))
}

async fn search_flights(
    State(state): State<AppState>,
    payload: Result<Json<SearchCriteria>, JsonRejection>,
) -> Response {
    let Json(criteria) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            warn!("failed to parse search request: {rejection}");
            return AppError::Validation(rejection.body_text()).into_response();
        }
    };

    let criteria = criteria.normalized();
    if let Err(err) = criteria.validate() {
        warn!("invalid search request: {err}");
        return AppError::from(err).into_response();
    }

    match state.aggregator.search_all(&criteria).await {
        Ok(result) => Envelope::ok(result).into_response(),
        Err(err) => {
            warn!("search rejected: {err}");
            AppError::from(err).into_response()
        }
    }
}
