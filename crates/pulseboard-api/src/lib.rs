#![forbid(unsafe_code)]
//! The Pulseboard API contract.
//!
//! Single source of truth for every request/response shape: the wire DTOs,
//! the structured validation-failure body, the non-validation error envelope
//! with its status mapping, the schema validators that produce domain values
//! from untrusted JSON, and the generated OpenAPI document.

pub mod dto;
pub mod error_mapping;
pub mod errors;
pub mod openapi;
pub mod schema;

pub use dto::ProjectDto;
pub use error_mapping::status_for;
pub use errors::{
    ApiError, ApiErrorCode, IssueCode, ValidationFailure, ValidationIssue,
    VALIDATION_FAILED_MESSAGE,
};
pub use openapi::openapi_document;
pub use schema::{validate_create, validate_project_id, validate_update};

pub const CRATE_NAME: &str = "pulseboard-api";
