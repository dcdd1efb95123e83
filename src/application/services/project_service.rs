//! Project management service.

use crate::domain::entities::{NewProject, Project, ProjectPatch};
use crate::domain::listing::{ListQuery, Page};
use crate::domain::messages;
use crate::domain::repositories::{CustomerRepository, ProjectRepository};
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for project CRUD operations.
///
/// Enforces the rules that need storage access:
/// - project names are unique, soft-deleted projects included
/// - a referenced customer must exist
pub struct ProjectService {
    projects: Arc<dyn ProjectRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            projects,
            customers,
        }
    }

    /// Creates a new project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is taken or the customer
    /// does not exist. Nothing is inserted in that case.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_project(&self, new_project: NewProject) -> Result<Project, AppError> {
        if self.projects.find_by_name(&new_project.name).await?.is_some() {
            return Err(AppError::invalid_field("name", messages::NAME_TAKEN));
        }

        if let Some(customer_id) = new_project.customer_id {
            self.ensure_customer(customer_id).await?;
        }

        let project = self.projects.create(new_project).await?;
        tracing::info!(project_id = project.id, name = %project.name, "Project created");
        Ok(project)
    }

    /// Retrieves a live project by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist or is deleted.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_project(&self, id: i64) -> Result<Project, AppError> {
        self.projects
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetches one page of live projects together with the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] for unknown sort fields or storage errors.
    pub async fn list_projects(&self, query: &ListQuery) -> Result<Page<Project>, AppError> {
        let (items, total) = tokio::try_join!(self.projects.list(query), self.projects.count())?;

        Ok(Page::new(items, query, total))
    }

    /// Applies a partial update to a live project.
    ///
    /// Renaming a project to its current name is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist or is deleted.
    /// Returns [`AppError::Validation`] if the new name belongs to another
    /// project or the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_project(&self, id: i64, patch: ProjectPatch) -> Result<Project, AppError> {
        let current = self.get_project(id).await?;

        if let Some(name) = patch.name.as_deref()
            && name != current.name
            && let Some(other) = self.projects.find_by_name(name).await?
            && other.id != id
        {
            return Err(AppError::invalid_field("name", messages::NAME_TAKEN));
        }

        if let Some(Some(customer_id)) = patch.customer_id {
            self.ensure_customer(customer_id).await?;
        }

        self.projects
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Soft-deletes a project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the project does not exist or was
    /// already deleted.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_project(&self, id: i64) -> Result<(), AppError> {
        if !self.projects.soft_delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(project_id = id, "Project deleted");
        Ok(())
    }

    /// Counts live projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_projects(&self) -> Result<i64, AppError> {
        self.projects.count().await
    }

    /// Lists soft-deleted projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn trashed_projects(&self) -> Result<Vec<Project>, AppError> {
        self.projects.list_trashed().await
    }

    /// Restores a soft-deleted project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no deleted project has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn restore_project(&self, id: i64) -> Result<Project, AppError> {
        if !self.projects.restore(id).await? {
            return Err(AppError::not_found(
                "Deleted project not found",
                json!({ "id": id }),
            ));
        }

        tracing::info!(project_id = id, "Project restored");
        self.get_project(id).await
    }

    /// Permanently removes all soft-deleted projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn purge_trashed(&self) -> Result<u64, AppError> {
        let purged = self.projects.purge_trashed().await?;
        tracing::info!(purged, "Deleted projects purged");
        Ok(purged)
    }

    async fn ensure_customer(&self, customer_id: i64) -> Result<(), AppError> {
        if self.customers.find_by_id(customer_id).await?.is_none() {
            return Err(AppError::invalid_field(
                "customer_id",
                messages::CUSTOMER_INVALID,
            ));
        }
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Project not found", json!({ "id": id }))
}
