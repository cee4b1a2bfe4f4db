//! Store outcome -> HTTP status + error envelope.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use counterhub_core::error::{ClientCode, CounterError};

/// HTTP wrapper around `CounterError`. Handlers return this so `?` works on
/// store calls.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CounterError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CounterError::AlreadyExists(_) => StatusCode::CONFLICT,
            CounterError::NotFound(_) => StatusCode::NOT_FOUND,
            CounterError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CounterError::UnsupportedVersion | CounterError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_expected() {
            tracing::debug!(%status, err = %self.0, "counter request rejected");
        } else if status.is_server_error() {
            tracing::error!(%status, err = %self.0, "counter request failed");
        }
        envelope(status, self.0.client_code(), &self.0.to_string())
    }
}

/// `{"error": CODE, "message": ...}`
pub fn envelope(status: StatusCode, code: ClientCode, message: &str) -> Response {
    let body = Json(json!({
        "error": code.as_str(),
        "message": message,
    }));
    (status, body).into_response()
}

/// Router fallback for paths outside the route table.
pub async fn no_route(uri: Uri) -> Response {
    envelope(
        StatusCode::NOT_FOUND,
        ClientCode::NotFound,
        &format!("no route for {}", uri.path()),
    )
}
