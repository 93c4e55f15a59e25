use std::borrow::Cow;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

/// Failure answered as `{"error": "..."}`.
#[derive(Debug, serde::Serialize)]
pub(crate) struct Error {
    #[serde(skip)]
    status: StatusCode,
    #[serde(rename = "error")]
    message: Cow<'static, str>,
}

impl Error {
    #[inline]
    pub fn new(status: StatusCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Self::internal(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}
