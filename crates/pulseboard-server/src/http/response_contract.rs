// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pulseboard_api::{status_for, ApiError, ValidationFailure, ValidationIssue};
use serde_json::{json, Value};

pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status =
        StatusCode::from_u16(status_for(err.code)).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": err}))).into_response()
}

pub(crate) fn validation_failure_response(failure: ValidationFailure) -> Response {
    (StatusCode::BAD_REQUEST, Json(failure)).into_response()
}

/// A body that is not JSON at all is still a validation failure, never a
/// server fault.
pub(crate) fn parse_json_body(bytes: &[u8]) -> Result<Value, ValidationFailure> {
    serde_json::from_slice(bytes).map_err(|err| {
        ValidationFailure::single(ValidationIssue::invalid_type(
            Vec::new(),
            "object",
            format!("malformed JSON body: {err}"),
        ))
    })
}
