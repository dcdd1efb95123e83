use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::{MemoryStore, Tables, paginate};
use crate::domain::entities::{NewProject, Project, ProjectPatch};
use crate::domain::listing::ListQuery;
use crate::domain::messages;
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;

/// In-memory repository for projects.
///
/// Soft-deleted projects stay in the table with `deleted_at` set.
pub struct InMemoryProjectRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryProjectRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

/// Enforces the unique name and customer foreign key for a write to `id`.
fn check_constraints(
    tables: &Tables,
    id: Option<i64>,
    name: &str,
    customer_id: Option<i64>,
) -> Result<(), AppError> {
    if tables
        .projects
        .values()
        .any(|p| p.name == name && Some(p.id) != id)
    {
        return Err(AppError::invalid_field("name", messages::NAME_TAKEN));
    }

    if let Some(customer_id) = customer_id
        && !tables.customers.contains_key(&customer_id)
    {
        return Err(AppError::invalid_field(
            "customer_id",
            messages::CUSTOMER_INVALID,
        ));
    }

    Ok(())
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, new_project: NewProject) -> Result<Project, AppError> {
        let mut tables = self.store.tables.write().await;
        check_constraints(
            &tables,
            None,
            &new_project.name,
            new_project.customer_id,
        )?;

        let now = Utc::now();
        let id = tables.next_project_id();
        let project = Project::new(
            id,
            new_project.name,
            new_project.description,
            new_project.customer_id,
            now,
            now,
            None,
        );
        tables.projects.insert(id, project.clone());

        Ok(project)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .projects
            .get(&id)
            .filter(|p| !p.is_deleted())
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError> {
        let tables = self.store.tables.read().await;
        Ok(tables.projects.values().find(|p| p.name == name).cloned())
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Project>, AppError> {
        let tables = self.store.tables.read().await;
        paginate(tables.projects.values().filter(|p| !p.is_deleted()), query)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let tables = self.store.tables.read().await;
        let live = tables.projects.values().filter(|p| !p.is_deleted()).count();
        Ok(i64::try_from(live).unwrap_or(i64::MAX))
    }

    async fn update(&self, id: i64, patch: ProjectPatch) -> Result<Option<Project>, AppError> {
        let mut tables = self.store.tables.write().await;

        let Some(mut updated) = tables
            .projects
            .get(&id)
            .filter(|p| !p.is_deleted())
            .cloned()
        else {
            return Ok(None);
        };

        updated.apply(patch);
        check_constraints(&tables, Some(id), &updated.name, updated.customer_id)?;
        updated.updated_at = Utc::now();
        tables.projects.insert(id, updated.clone());

        Ok(Some(updated))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.store.tables.write().await;

        match tables.projects.get_mut(&id) {
            Some(project) if !project.is_deleted() => {
                project.deleted_at = Some(Utc::now());
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_trashed(&self) -> Result<Vec<Project>, AppError> {
        let tables = self.store.tables.read().await;
        let mut trashed: Vec<Project> = tables
            .projects
            .values()
            .filter(|p| p.is_deleted())
            .cloned()
            .collect();
        trashed.sort_by(|a, b| b.deleted_at.cmp(&a.deleted_at).then(a.id.cmp(&b.id)));

        Ok(trashed)
    }

    async fn restore(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.store.tables.write().await;

        match tables.projects.get_mut(&id) {
            Some(project) if project.is_deleted() => {
                project.deleted_at = None;
                project.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn purge_trashed(&self) -> Result<u64, AppError> {
        let mut tables = self.store.tables.write().await;
        let before = tables.projects.len();
        tables.projects.retain(|_, p| !p.is_deleted());

        Ok(u64::try_from(before - tables.projects.len()).unwrap_or(u64::MAX))
    }
}
