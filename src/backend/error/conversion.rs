/**
 * Error Conversion
 *
 * Renders `AppError` as an HTTP response and turns axum's extractor
 * rejections into `AppError` so they share the same body shape:
 *
 * ```json
 * { "message": "Error message" }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::backend::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("Request failed with {}: {}", status, self);
        }

        let body = Json(json!({ "message": self.message() }));
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
