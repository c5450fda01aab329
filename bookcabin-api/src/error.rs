use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use bookcabin_domain::search::ValidationError;
use bookcabin_engine::SearchError;

use crate::response::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Search(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            AppError::Internal(err) => {
                tracing::error!("internal server error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        Envelope::error(status, msg).into_response()
    }
}
