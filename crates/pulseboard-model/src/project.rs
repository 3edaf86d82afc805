use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const NAME_MIN_LEN: usize = 3;
pub const NAME_MAX_LEN: usize = 100;
pub const PROGRESS_MAX: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NameTooShort,
    NameTooLong,
    ProgressOutOfRange(i64),
    UnknownStatus(String),
    InvalidId(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameTooShort => {
                write!(f, "name must be at least {NAME_MIN_LEN} characters")
            }
            Self::NameTooLong => {
                write!(f, "name must be at most {NAME_MAX_LEN} characters")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "progress must be between 0 and {PROGRESS_MAX}, got {value}")
            }
            Self::UnknownStatus(raw) => write!(f, "unknown status: {raw}"),
            Self::InvalidId(raw) => write!(f, "invalid project id: {raw}"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Opaque project identifier, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectId(Uuid);

impl ProjectId {
    #[must_use]
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Uuid::parse_str(input.trim())
            .map(Self)
            .map_err(|_| ValidationError::InvalidId(input.to_string()))
    }

    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project display name, 3 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let chars = input.chars().count();
        if chars < NAME_MIN_LEN {
            return Err(ValidationError::NameTooShort);
        }
        if chars > NAME_MAX_LEN {
            return Err(ValidationError::NameTooLong);
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Completion percentage, 0 to 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    pub fn parse(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= PROGRESS_MAX)
            .map(Self)
            .ok_or(ValidationError::ProgressOutOfRange(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Active,
    #[serde(rename = "On Hold")]
    OnHold,
    Complete,
    Blocked,
}

impl ProjectStatus {
    /// Wire strings, in declaration order. The space in `On Hold` is part of
    /// the contract.
    pub const VALUES: [&'static str; 4] = ["Active", "On Hold", "Complete", "Blocked"];

    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        match raw {
            "Active" => Ok(Self::Active),
            "On Hold" => Ok(Self::OnHold),
            "Complete" => Ok(Self::Complete),
            "Blocked" => Ok(Self::Blocked),
            _ => Err(ValidationError::UnknownStatus(raw.to_string())),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Complete => "Complete",
            Self::Blocked => "Blocked",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status-tracked work item. The store owns every record; callers only
/// ever see clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub lead: String,
    pub name: ProjectName,
    pub progress: Progress,
    pub status: ProjectStatus,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Creation shape: a `Project` minus the store-assigned `id` and
/// `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub lead: String,
    pub name: ProjectName,
    pub progress: Progress,
    pub status: ProjectStatus,
}

/// Update shape: the creation shape with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub lead: Option<String>,
    pub name: Option<ProjectName>,
    pub progress: Option<Progress>,
    pub status: Option<ProjectStatus>,
}

impl ProjectPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lead.is_none()
            && self.name.is_none()
            && self.progress.is_none()
            && self.status.is_none()
    }

    /// Merge the provided fields into `project`. Does not touch
    /// `updated_at`; the store refreshes that unconditionally.
    pub fn apply(self, project: &mut Project) {
        if let Some(lead) = self.lead {
            project.lead = lead;
        }
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(progress) = self.progress {
            project.progress = progress;
        }
        if let Some(status) = self.status {
            project.status = status;
        }
    }
}
