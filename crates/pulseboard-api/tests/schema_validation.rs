use pulseboard_api::{validate_create, validate_project_id, validate_update, IssueCode};
use pulseboard_model::{ProjectId, ProjectStatus};
use serde_json::json;

fn base_body() -> serde_json::Value {
    json!({
        "lead": "John Doe",
        "name": "Test Project",
        "progress": 0,
        "status": "Active"
    })
}

#[test]
fn create_accepts_a_well_formed_body() {
    let new_project = validate_create(&base_body()).expect("valid body");
    assert_eq!(new_project.lead, "John Doe");
    assert_eq!(new_project.name.as_str(), "Test Project");
    assert_eq!(new_project.progress.value(), 0);
    assert_eq!(new_project.status, ProjectStatus::Active);
}

#[test]
fn create_ignores_unknown_keys() {
    let mut body = base_body();
    body["color"] = json!("magenta");
    assert!(validate_create(&body).is_ok());
}

#[test]
fn create_rejects_missing_fields_with_one_issue_each() {
    let issues = validate_create(&json!({})).expect_err("empty body");
    assert_eq!(issues.len(), 4);
    for issue in &issues {
        assert_eq!(issue.code, IssueCode::InvalidType);
        assert_eq!(issue.path.len(), 1);
    }
    let paths: Vec<&str> = issues.iter().map(|i| i.path[0].as_str()).collect();
    assert_eq!(paths, vec!["lead", "name", "progress", "status"]);
}

#[test]
fn create_rejects_two_char_name() {
    let mut body = base_body();
    body["name"] = json!("ab");
    let issues = validate_create(&body).expect_err("short name");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, IssueCode::TooSmall);
    assert_eq!(issues[0].path, vec!["name".to_string()]);
}

#[test]
fn create_rejects_name_over_one_hundred_chars() {
    let mut body = base_body();
    body["name"] = json!("x".repeat(101));
    let issues = validate_create(&body).expect_err("long name");
    assert_eq!(issues[0].code, IssueCode::TooBig);
}

#[test]
fn create_enforces_progress_bounds_and_integrality() {
    let mut body = base_body();
    body["progress"] = json!(101);
    let issues = validate_create(&body).expect_err("progress over max");
    assert_eq!(issues[0].code, IssueCode::TooBig);

    body["progress"] = json!(-1);
    let issues = validate_create(&body).expect_err("negative progress");
    assert_eq!(issues[0].code, IssueCode::TooSmall);

    body["progress"] = json!(49.5);
    let issues = validate_create(&body).expect_err("fractional progress");
    assert_eq!(issues[0].code, IssueCode::InvalidType);
    assert_eq!(issues[0].expected.as_deref(), Some("integer"));
}

#[test]
fn create_rejects_unknown_status_and_names_the_allowed_values() {
    let mut body = base_body();
    body["status"] = json!("Paused");
    let issues = validate_create(&body).expect_err("unknown status");
    assert_eq!(issues[0].code, IssueCode::InvalidValue);
    let allowed = issues[0].allowed.as_ref().expect("allowed values");
    assert_eq!(allowed, &["Active", "On Hold", "Complete", "Blocked"]);
}

#[test]
fn create_collects_every_issue_in_one_pass() {
    let body = json!({"lead": 7, "name": "ab", "progress": 200, "status": "Nope"});
    let issues = validate_create(&body).expect_err("four bad fields");
    assert_eq!(issues.len(), 4);
}

#[test]
fn create_rejects_non_object_body_at_the_root() {
    let issues = validate_create(&json!([1, 2, 3])).expect_err("array body");
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].code, IssueCode::InvalidType);
    assert!(issues[0].path.is_empty());
}

#[test]
fn update_accepts_an_empty_object() {
    let patch = validate_update(&json!({})).expect("empty patch");
    assert!(patch.is_empty());
}

#[test]
fn update_applies_the_same_field_constraints_as_create() {
    let patch = validate_update(&json!({"progress": 50})).expect("partial patch");
    assert_eq!(patch.progress.expect("progress").value(), 50);
    assert!(patch.lead.is_none());

    let issues = validate_update(&json!({"name": "ab"})).expect_err("short name");
    assert_eq!(issues[0].code, IssueCode::TooSmall);

    let issues = validate_update(&json!({"status": "Paused"})).expect_err("unknown status");
    assert_eq!(issues[0].code, IssueCode::InvalidValue);
}

#[test]
fn project_id_must_be_a_uuid() {
    let issue = validate_project_id("not-a-uuid").expect_err("malformed id");
    assert_eq!(issue.code, IssueCode::InvalidFormat);
    assert_eq!(issue.path, vec!["id".to_string()]);

    let id = ProjectId::new_v4();
    let parsed = validate_project_id(&id.to_string()).expect("well-formed id");
    assert_eq!(parsed, id);
}
