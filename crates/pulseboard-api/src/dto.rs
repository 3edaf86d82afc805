// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use pulseboard_model::{Project, ProjectStatus};
use serde::{Deserialize, Serialize};

/// Wire shape of a project record. Field names and types are the contract;
/// `deny_unknown_fields` makes round-trip drift fail loudly in tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectDto {
    pub id: String,
    pub lead: String,
    pub name: String,
    pub progress: u8,
    pub status: ProjectStatus,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectDto {
    fn from(project: Project) -> Self {
        Self {
            id: project.id.to_string(),
            lead: project.lead,
            name: project.name.into_inner(),
            progress: project.progress.value(),
            status: project.status,
            updated_at: project.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulseboard_model::{Progress, ProjectId, ProjectName};

    #[test]
    fn dto_conversion_flattens_domain_newtypes() {
        let project = Project {
            id: ProjectId::new_v4(),
            lead: "Jane Smith".to_string(),
            name: ProjectName::parse("Project 2").expect("name"),
            progress: Progress::parse(50).expect("progress"),
            status: ProjectStatus::OnHold,
            updated_at: Utc::now(),
        };
        let dto = ProjectDto::from(project.clone());
        assert_eq!(dto.id, project.id.to_string());
        assert_eq!(dto.name, "Project 2");
        assert_eq!(dto.progress, 50);

        let value = serde_json::to_value(&dto).expect("serialize");
        assert_eq!(value["status"], "On Hold");
        assert!(value.get("updatedAt").is_some());
    }
}
