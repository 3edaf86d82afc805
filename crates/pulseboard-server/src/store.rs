use chrono::Utc;
use pulseboard_model::{NewProject, Project, ProjectId, ProjectPatch};
use tokio::sync::Mutex;

/// In-memory authority for project records within one process.
///
/// A single mutex serializes mutations, so create/update/delete are atomic
/// with respect to the underlying collection even when axum dispatches
/// requests across worker threads. Every operation hands out clones; the
/// store's records are never aliased by callers.
pub struct ProjectStore {
    projects: Mutex<Vec<Project>>,
}

impl ProjectStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_projects(Vec::new())
    }

    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self {
            projects: Mutex::new(projects),
        }
    }

    /// Snapshot of all records, insertion order.
    pub async fn get(&self) -> Vec<Project> {
        self.projects.lock().await.clone()
    }

    /// Assign a fresh id and timestamp, append, return a clone.
    pub async fn create(&self, data: NewProject) -> Project {
        let project = Project {
            id: ProjectId::new_v4(),
            lead: data.lead,
            name: data.name,
            progress: data.progress,
            status: data.status,
            updated_at: Utc::now(),
        };
        self.projects.lock().await.push(project.clone());
        project
    }

    pub async fn get_by_id(&self, id: &ProjectId) -> Option<Project> {
        self.projects
            .lock()
            .await
            .iter()
            .find(|p| p.id == *id)
            .cloned()
    }

    /// Merge the provided fields into the matching record. The timestamp is
    /// refreshed unconditionally; an empty patch is a timestamp touch.
    pub async fn update(&self, id: &ProjectId, patch: ProjectPatch) -> Option<Project> {
        let mut projects = self.projects.lock().await;
        let project = projects.iter_mut().find(|p| p.id == *id)?;
        patch.apply(project);
        project.updated_at = Utc::now();
        Some(project.clone())
    }

    /// Remove the matching record, reporting whether one was removed.
    pub async fn delete(&self, id: &ProjectId) -> bool {
        let mut projects = self.projects.lock().await;
        match projects.iter().position(|p| p.id == *id) {
            Some(index) => {
                projects.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulseboard_model::{Progress, ProjectName, ProjectStatus};

    fn new_project(lead: &str, name: &str, progress: i64, status: ProjectStatus) -> NewProject {
        NewProject {
            lead: lead.to_string(),
            name: ProjectName::parse(name).expect("name"),
            progress: Progress::parse(progress).expect("progress"),
            status,
        }
    }

    #[tokio::test]
    async fn empty_store_returns_empty_snapshot() {
        let store = ProjectStore::new();
        assert!(store.get().await.is_empty());
    }

    #[tokio::test]
    async fn created_project_is_immediately_retrievable_and_equal() {
        let store = ProjectStore::new();
        let created = store
            .create(new_project("John Doe", "Test Project", 0, ProjectStatus::Active))
            .await;

        let fetched = store.get_by_id(&created.id).await.expect("created project");
        assert_eq!(fetched, created);

        let all = store.get().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], created);
    }

    #[tokio::test]
    async fn snapshot_preserves_insertion_order() {
        let store = ProjectStore::new();
        let first = store
            .create(new_project("John Doe", "Project 1", 0, ProjectStatus::Active))
            .await;
        let second = store
            .create(new_project("Jane Smith", "Project 2", 50, ProjectStatus::OnHold))
            .await;

        let all = store.get().await;
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn snapshots_are_copies_not_references() {
        let store = ProjectStore::new();
        store
            .create(new_project("John Doe", "Project 1", 0, ProjectStatus::Active))
            .await;

        let mut snapshot = store.get().await;
        snapshot.clear();
        assert_eq!(store.get().await.len(), 1);
    }

    #[tokio::test]
    async fn empty_patch_refreshes_only_the_timestamp() {
        let store = ProjectStore::new();
        let created = store
            .create(new_project("John Doe", "Project 1", 0, ProjectStatus::Active))
            .await;

        let updated = store
            .update(&created.id, ProjectPatch::default())
            .await
            .expect("existing project");

        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.lead, created.lead);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.progress, created.progress);
        assert_eq!(updated.status, created.status);
    }

    #[tokio::test]
    async fn partial_update_touches_exactly_the_provided_fields() {
        let store = ProjectStore::new();
        let created = store
            .create(new_project("John Doe", "Project 1", 0, ProjectStatus::Active))
            .await;

        let patch = ProjectPatch {
            progress: Some(Progress::parse(75).expect("progress")),
            status: Some(ProjectStatus::Blocked),
            ..ProjectPatch::default()
        };
        let updated = store.update(&created.id, patch).await.expect("updated");

        assert_eq!(updated.progress.value(), 75);
        assert_eq!(updated.status, ProjectStatus::Blocked);
        assert_eq!(updated.lead, created.lead);
        assert_eq!(updated.name, created.name);

        let fetched = store.get_by_id(&created.id).await.expect("fetched");
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_absent_and_leaves_store_unchanged() {
        let store = ProjectStore::new();
        let created = store
            .create(new_project("John Doe", "Project 1", 0, ProjectStatus::Active))
            .await;

        let patch = ProjectPatch {
            progress: Some(Progress::parse(50).expect("progress")),
            ..ProjectPatch::default()
        };
        assert!(store.update(&ProjectId::new_v4(), patch).await.is_none());
        assert_eq!(store.get().await, vec![created]);
    }

    #[tokio::test]
    async fn delete_removes_exactly_the_matching_record() {
        let store = ProjectStore::new();
        let first = store
            .create(new_project("John Doe", "Project 1", 0, ProjectStatus::Active))
            .await;
        let second = store
            .create(new_project("Jane Smith", "Project 2", 50, ProjectStatus::OnHold))
            .await;

        assert!(store.delete(&first.id).await);
        assert!(store.get_by_id(&first.id).await.is_none());
        assert_eq!(store.get().await, vec![second]);

        assert!(!store.delete(&ProjectId::new_v4()).await);
    }

    #[tokio::test]
    async fn seeded_store_serves_its_initial_records() {
        let store = ProjectStore::new();
        let seeded = store
            .create(new_project("John Doe", "Project 1", 0, ProjectStatus::Active))
            .await;

        let restored = ProjectStore::with_projects(vec![seeded.clone()]);
        assert_eq!(restored.get().await, vec![seeded]);
    }
}
