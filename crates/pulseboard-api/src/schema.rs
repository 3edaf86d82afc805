// SPDX-License-Identifier: Apache-2.0
//! Schema validators: untrusted JSON in, domain values out.
//!
//! One validator per field, shared verbatim between the creation and update
//! paths. The creation shape requires every field; the update shape applies
//! each validator only when the field is present. All issues for a body are
//! collected and returned together.

use crate::errors::ValidationIssue;
use pulseboard_model::{
    NewProject, Progress, ProjectId, ProjectName, ProjectPatch, ProjectStatus, ValidationError,
};
use serde_json::{Map, Value};

fn field_path(field: &str) -> Vec<String> {
    vec![field.to_string()]
}

fn model_issue(field: &str, err: &ValidationError) -> ValidationIssue {
    let path = field_path(field);
    match err {
        ValidationError::NameTooShort => ValidationIssue::too_small(path, err.to_string()),
        ValidationError::NameTooLong => ValidationIssue::too_big(path, err.to_string()),
        ValidationError::ProgressOutOfRange(value) if *value < 0 => {
            ValidationIssue::too_small(path, err.to_string())
        }
        ValidationError::ProgressOutOfRange(_) => ValidationIssue::too_big(path, err.to_string()),
        ValidationError::UnknownStatus(_) => {
            ValidationIssue::invalid_value(path, &ProjectStatus::VALUES, err.to_string())
        }
        ValidationError::InvalidId(_) => ValidationIssue::invalid_format(path, err.to_string()),
    }
}

fn string_value<'v>(field: &str, value: &'v Value) -> Result<&'v str, ValidationIssue> {
    value
        .as_str()
        .ok_or_else(|| ValidationIssue::invalid_type(field_path(field), "string", "expected string"))
}

fn lead_field(field: &str, value: &Value) -> Result<String, ValidationIssue> {
    string_value(field, value).map(ToString::to_string)
}

fn name_field(field: &str, value: &Value) -> Result<ProjectName, ValidationIssue> {
    let raw = string_value(field, value)?;
    ProjectName::parse(raw).map_err(|err| model_issue(field, &err))
}

fn progress_field(field: &str, value: &Value) -> Result<Progress, ValidationIssue> {
    let raw = value.as_i64().ok_or_else(|| {
        ValidationIssue::invalid_type(field_path(field), "integer", "expected integer")
    })?;
    Progress::parse(raw).map_err(|err| model_issue(field, &err))
}

fn status_field(field: &str, value: &Value) -> Result<ProjectStatus, ValidationIssue> {
    let raw = string_value(field, value)?;
    ProjectStatus::parse(raw).map_err(|err| model_issue(field, &err))
}

fn body_object(body: &Value) -> Result<&Map<String, Value>, ValidationIssue> {
    body.as_object().ok_or_else(|| {
        ValidationIssue::invalid_type(
            Vec::new(),
            "object",
            "expected request body to be a JSON object",
        )
    })
}

fn required<T>(
    map: &Map<String, Value>,
    field: &str,
    expected: &str,
    parse: fn(&str, &Value) -> Result<T, ValidationIssue>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<T> {
    let Some(value) = map.get(field) else {
        issues.push(ValidationIssue::invalid_type(
            field_path(field),
            expected,
            format!("{field} is required"),
        ));
        return None;
    };
    match parse(field, value) {
        Ok(parsed) => Some(parsed),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

fn optional<T>(
    map: &Map<String, Value>,
    field: &str,
    parse: fn(&str, &Value) -> Result<T, ValidationIssue>,
    issues: &mut Vec<ValidationIssue>,
) -> Option<T> {
    let value = map.get(field)?;
    match parse(field, value) {
        Ok(parsed) => Some(parsed),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

/// Validate a creation body. Unknown keys are ignored, matching the original
/// contract consumers.
pub fn validate_create(body: &Value) -> Result<NewProject, Vec<ValidationIssue>> {
    let map = body_object(body).map_err(|issue| vec![issue])?;
    let mut issues = Vec::new();

    let lead = required(map, "lead", "string", lead_field, &mut issues);
    let name = required(map, "name", "string", name_field, &mut issues);
    let progress = required(map, "progress", "integer", progress_field, &mut issues);
    let status = required(map, "status", "string", status_field, &mut issues);

    match (lead, name, progress, status) {
        (Some(lead), Some(name), Some(progress), Some(status)) if issues.is_empty() => {
            Ok(NewProject {
                lead,
                name,
                progress,
                status,
            })
        }
        _ => Err(issues),
    }
}

/// Validate a partial-update body. Every field optional, same per-field
/// constraints as creation; an empty object is a valid (timestamp-touch)
/// update.
pub fn validate_update(body: &Value) -> Result<ProjectPatch, Vec<ValidationIssue>> {
    let map = body_object(body).map_err(|issue| vec![issue])?;
    let mut issues = Vec::new();

    let patch = ProjectPatch {
        lead: optional(map, "lead", lead_field, &mut issues),
        name: optional(map, "name", name_field, &mut issues),
        progress: optional(map, "progress", progress_field, &mut issues),
        status: optional(map, "status", status_field, &mut issues),
    };

    if issues.is_empty() {
        Ok(patch)
    } else {
        Err(issues)
    }
}

/// Validate a path id segment.
pub fn validate_project_id(raw: &str) -> Result<ProjectId, ValidationIssue> {
    ProjectId::parse(raw).map_err(|err| model_issue("id", &err))
}
