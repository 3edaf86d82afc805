// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fixed top-level message of every 400 validation body. Contract consumers
/// match on it byte-for-byte.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    TooSmall,
    TooBig,
    InvalidValue,
    InvalidFormat,
}

/// One per-field problem inside a [`ValidationFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,
}

impl ValidationIssue {
    #[must_use]
    pub fn invalid_type(path: Vec<String>, expected: &str, message: impl Into<String>) -> Self {
        Self {
            code: IssueCode::InvalidType,
            message: message.into(),
            path,
            expected: Some(expected.to_string()),
            allowed: None,
        }
    }

    #[must_use]
    pub fn too_small(path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            code: IssueCode::TooSmall,
            message: message.into(),
            path,
            expected: None,
            allowed: None,
        }
    }

    #[must_use]
    pub fn too_big(path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            code: IssueCode::TooBig,
            message: message.into(),
            path,
            expected: None,
            allowed: None,
        }
    }

    #[must_use]
    pub fn invalid_value(
        path: Vec<String>,
        allowed: &[&str],
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: IssueCode::InvalidValue,
            message: message.into(),
            path,
            expected: None,
            allowed: Some(allowed.iter().map(ToString::to_string).collect()),
        }
    }

    #[must_use]
    pub fn invalid_format(path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            code: IssueCode::InvalidFormat,
            message: message.into(),
            path,
            expected: None,
            allowed: None,
        }
    }
}

/// The 400 response body. `message` is always [`VALIDATION_FAILED_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationFailure {
    pub message: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationFailure {
    #[must_use]
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self {
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            issues,
        }
    }

    #[must_use]
    pub fn single(issue: ValidationIssue) -> Self {
        Self::new(vec![issue])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ApiErrorCode {
    ProjectNotFound,
    PayloadTooLarge,
    Internal,
}

/// Error envelope for every non-validation failure, serialized under a
/// top-level `"error"` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn project_not_found(id: &str) -> Self {
        Self::new(
            ApiErrorCode::ProjectNotFound,
            format!("no project with id {id}"),
            json!({"id": id}),
        )
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message, json!({}))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_message_is_fixed() {
        let failure = ValidationFailure::new(Vec::new());
        assert_eq!(failure.message, "Validation failed");
    }

    #[test]
    fn absent_issue_fields_are_omitted_from_json() {
        let issue = ValidationIssue::too_small(vec!["name".to_string()], "too short");
        let value = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(value["code"], "too_small");
        assert_eq!(value["path"][0], "name");
        assert!(value.get("expected").is_none());
        assert!(value.get("allowed").is_none());
    }

    #[test]
    fn enum_issue_carries_allowed_values() {
        let issue = ValidationIssue::invalid_value(
            vec!["status".to_string()],
            &["Active", "On Hold"],
            "invalid status",
        );
        let value = serde_json::to_value(&issue).expect("serialize issue");
        assert_eq!(value["allowed"][1], "On Hold");
    }

    #[test]
    fn api_error_details_carry_the_missing_id() {
        let err = ApiError::project_not_found("p-1");
        assert_eq!(err.code, ApiErrorCode::ProjectNotFound);
        assert_eq!(err.details["id"], "p-1");
    }
}
