//! API error responses

use crate::api::dto::ErrorResponse;
use crate::error::ServerError;
use axum::{
    response::{IntoResponse, Response},
    Json,
};

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::debug!(code = self.error_code(), error = %self, "Request rejected");

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
