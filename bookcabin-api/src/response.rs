use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Standard envelope wrapping every API payload:
/// `{code, data, error, message, serverTime}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub error: ErrorBody,
    pub message: String,
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: bool,
    pub msg: String,
    pub code: u16,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            data: Some(data),
            error: ErrorBody {
                status: false,
                msg: String::new(),
                code: 0,
            },
            message: String::new(),
            server_time: Utc::now().timestamp(),
        }
    }
}

impl Envelope<()> {
    pub fn error(status: StatusCode, msg: impl Into<String>) -> Self {
        let code = status.as_u16();
        Self {
            code,
            data: None,
            error: ErrorBody {
                status: true,
                msg: msg.into(),
                code,
            },
            message: String::new(),
            server_time: Utc::now().timestamp(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
