// SPDX-License-Identifier: Apache-2.0
//! Generated OpenAPI document.
//!
//! The creation and update request schemas are derived from the canonical
//! project schema by the same mechanical transform the validators use: drop
//! the store-assigned fields for creation, drop the required list for update.

use pulseboard_model::{ProjectStatus, NAME_MAX_LEN, NAME_MIN_LEN, PROGRESS_MAX};
use serde_json::{json, Map, Value};

/// Fields assigned by the store, absent from the creation request.
const STORE_ASSIGNED_FIELDS: [&str; 2] = ["id", "updatedAt"];

fn project_properties() -> Map<String, Value> {
    let mut props = Map::new();
    props.insert("id".to_string(), json!({"type": "string", "format": "uuid"}));
    props.insert("lead".to_string(), json!({"type": "string"}));
    props.insert(
        "name".to_string(),
        json!({"type": "string", "minLength": NAME_MIN_LEN, "maxLength": NAME_MAX_LEN}),
    );
    props.insert(
        "progress".to_string(),
        json!({"type": "integer", "minimum": 0, "maximum": PROGRESS_MAX}),
    );
    props.insert(
        "status".to_string(),
        json!({"type": "string", "enum": ProjectStatus::VALUES}),
    );
    props.insert(
        "updatedAt".to_string(),
        json!({"type": "string", "format": "date-time"}),
    );
    props
}

fn request_properties() -> Map<String, Value> {
    let mut props = project_properties();
    for field in STORE_ASSIGNED_FIELDS {
        props.remove(field);
    }
    props
}

fn request_required() -> Vec<&'static str> {
    vec!["lead", "name", "progress", "status"]
}

fn validation_failure_response() -> Value {
    json!({
        "description": "validation failed",
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ValidationFailure"}}}
    })
}

fn not_found_response() -> Value {
    json!({
        "description": "project not found",
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ApiErrorEnvelope"}}}
    })
}

fn project_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Project"}}}
    })
}

#[must_use]
pub fn openapi_document() -> Value {
    json!({
      "openapi": "3.1.0",
      "info": {
        "title": "Project API",
        "version": "1",
        "description": "API for managing project status dashboard"
      },
      "servers": [
        {"url": "http://localhost:3000", "description": "Local Endpoint"},
        {"url": "http://corp.com/prod", "description": "Prod Endpoint"}
      ],
      "paths": {
        "/api/projects": {
          "get": {
            "operationId": "getProjects",
            "summary": "Get All Projects",
            "responses": {
              "200": {
                "description": "Successful operation",
                "content": {"application/json": {"schema": {
                  "type": "array",
                  "items": {"$ref": "#/components/schemas/Project"}
                }}}
              }
            }
          },
          "post": {
            "operationId": "createProject",
            "summary": "Create New Project",
            "requestBody": {
              "required": true,
              "content": {"application/json": {"schema": {"$ref": "#/components/schemas/CreateProjectRequest"}}}
            },
            "responses": {
              "201": project_response("Successful creation"),
              "400": validation_failure_response()
            }
          }
        },
        "/api/projects/{id}": {
          "parameters": [
            {"name": "id", "in": "path", "required": true, "schema": {"type": "string", "format": "uuid"}}
          ],
          "get": {
            "operationId": "getProjectById",
            "summary": "Get Project By Id",
            "responses": {
              "200": project_response("Successful operation"),
              "400": validation_failure_response(),
              "404": not_found_response()
            }
          },
          "patch": {
            "operationId": "updateProject",
            "summary": "Update Project",
            "requestBody": {
              "required": true,
              "content": {"application/json": {"schema": {"$ref": "#/components/schemas/UpdateProjectRequest"}}}
            },
            "responses": {
              "200": project_response("Successful update"),
              "400": validation_failure_response(),
              "404": not_found_response()
            }
          },
          "delete": {
            "operationId": "deleteProject",
            "summary": "Delete Project",
            "responses": {
              "204": {"description": "Successful deletion"},
              "400": validation_failure_response(),
              "404": not_found_response()
            }
          }
        }
      },
      "components": {
        "schemas": {
          "ApiError": {
            "type": "object",
            "required": ["code", "message", "details"],
            "additionalProperties": false,
            "properties": {
              "code": {"$ref": "#/components/schemas/ApiErrorCode"},
              "message": {"type": "string"},
              "details": {"type": "object", "additionalProperties": true}
            }
          },
          "ApiErrorCode": {
            "type": "string",
            "enum": ["ProjectNotFound", "PayloadTooLarge", "Internal"]
          },
          "ApiErrorEnvelope": {
            "type": "object",
            "required": ["error"],
            "additionalProperties": false,
            "properties": {
              "error": {"$ref": "#/components/schemas/ApiError"}
            }
          },
          "CreateProjectRequest": {
            "type": "object",
            "required": request_required(),
            "properties": request_properties()
          },
          "Project": {
            "type": "object",
            "required": ["id", "lead", "name", "progress", "status", "updatedAt"],
            "properties": project_properties()
          },
          "UpdateProjectRequest": {
            "type": "object",
            "properties": request_properties()
          },
          "ValidationFailure": {
            "type": "object",
            "required": ["message", "issues"],
            "additionalProperties": false,
            "properties": {
              "message": {"type": "string", "description": "Always \"Validation failed\""},
              "issues": {"type": "array", "items": {"$ref": "#/components/schemas/ValidationIssue"}}
            }
          },
          "ValidationIssue": {
            "type": "object",
            "required": ["code", "message", "path"],
            "additionalProperties": false,
            "properties": {
              "code": {
                "type": "string",
                "enum": ["invalid_type", "too_small", "too_big", "invalid_value", "invalid_format"]
              },
              "message": {"type": "string"},
              "path": {"type": "array", "items": {"type": "string"}},
              "expected": {"type": "string"},
              "allowed": {"type": "array", "items": {"type": "string"}}
            }
          }
        }
      }
    })
}
