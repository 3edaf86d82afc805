#![forbid(unsafe_code)]
//! Pulseboard model SSOT.
//!
//! Every wire shape and every store record is built from the types in this
//! crate; the api and server crates never re-declare field constraints.

mod project;

pub use project::{
    NewProject, Progress, Project, ProjectId, ProjectName, ProjectPatch, ProjectStatus,
    ValidationError, NAME_MAX_LEN, NAME_MIN_LEN, PROGRESS_MAX,
};

pub const CRATE_NAME: &str = "pulseboard-model";
