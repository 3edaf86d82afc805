// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error_response;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use pulseboard_api::{openapi_document, ApiError};

const DOCS_INDEX_HTML: &str = include_str!("../assets/docs-index.html");

pub(crate) async fn openapi_document_handler() -> Response {
    match serde_json::to_string_pretty(&openapi_document()) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(err) => api_error_response(ApiError::internal(format!(
            "openapi serialization failed: {err}"
        ))),
    }
}

pub(crate) async fn docs_index_handler() -> Html<&'static str> {
    Html(DOCS_INDEX_HTML)
}
