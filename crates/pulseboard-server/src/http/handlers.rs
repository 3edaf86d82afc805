// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::{
    api_error_response, parse_json_body, validation_failure_response,
};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pulseboard_api::{schema, ApiError, ProjectDto, ValidationFailure};
use pulseboard_model::ProjectId;
use tracing::{debug, info};

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn list_projects_handler(State(state): State<AppState>) -> Response {
    let projects = state.store.get().await;
    let body: Vec<ProjectDto> = projects.into_iter().map(ProjectDto::from).collect();
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn create_project_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Response {
    let value = match parse_json_body(&body) {
        Ok(value) => value,
        Err(failure) => return validation_failure_response(failure),
    };
    match schema::validate_create(&value) {
        Ok(data) => {
            let project = state.store.create(data).await;
            info!(project_id = %project.id, "project created");
            (StatusCode::CREATED, Json(ProjectDto::from(project))).into_response()
        }
        Err(issues) => {
            debug!(issue_count = issues.len(), "creation body rejected");
            validation_failure_response(ValidationFailure::new(issues))
        }
    }
}

pub(crate) async fn get_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match state.store.get_by_id(&id).await {
        Some(project) => (StatusCode::OK, Json(ProjectDto::from(project))).into_response(),
        None => api_error_response(ApiError::project_not_found(&id.to_string())),
    }
}

pub(crate) async fn update_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let value = match parse_json_body(&body) {
        Ok(value) => value,
        Err(failure) => return validation_failure_response(failure),
    };
    let patch = match schema::validate_update(&value) {
        Ok(patch) => patch,
        Err(issues) => {
            debug!(issue_count = issues.len(), "update body rejected");
            return validation_failure_response(ValidationFailure::new(issues));
        }
    };
    match state.store.update(&id, patch).await {
        Some(project) => {
            info!(project_id = %project.id, "project updated");
            (StatusCode::OK, Json(ProjectDto::from(project))).into_response()
        }
        None => api_error_response(ApiError::project_not_found(&id.to_string())),
    }
}

pub(crate) async fn delete_project_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_path_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if state.store.delete(&id).await {
        info!(project_id = %id, "project deleted");
        StatusCode::NO_CONTENT.into_response()
    } else {
        api_error_response(ApiError::project_not_found(&id.to_string()))
    }
}

fn parse_path_id(raw: &str) -> Result<ProjectId, Response> {
    schema::validate_project_id(raw)
        .map_err(|issue| validation_failure_response(ValidationFailure::single(issue)))
}
