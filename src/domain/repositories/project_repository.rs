//! Repository trait for project data access.

use crate::domain::entities::{NewProject, Project, ProjectPatch};
use crate::domain::listing::ListQuery;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing projects.
///
/// Read paths used by the API never return soft-deleted projects. The
/// `*_trashed` family exists for administrative tooling.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProjectRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryProjectRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts a new project.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is already taken or the
    /// customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_project: NewProject) -> Result<Project, AppError>;

    /// Finds a live (not soft-deleted) project by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError>;

    /// Finds a project by exact name, soft-deleted ones included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError>;

    /// Fetches one page of live projects.
    ///
    /// The sort field is not checked against known columns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the sort field does not name a column
    /// or on storage errors.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Project>, AppError>;

    /// Counts live projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update to a live project.
    ///
    /// Returns `Ok(None)` if the project does not exist or is deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the new name is taken or the
    /// customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, patch: ProjectPatch) -> Result<Option<Project>, AppError>;

    /// Soft-deletes a project by setting `deleted_at`.
    ///
    /// Returns `Ok(false)` if the project does not exist or is already deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn soft_delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists soft-deleted projects, most recently deleted first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_trashed(&self) -> Result<Vec<Project>, AppError>;

    /// Clears `deleted_at` on a soft-deleted project.
    ///
    /// Returns `Ok(false)` if the project does not exist or is not deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn restore(&self, id: i64) -> Result<bool, AppError>;

    /// Permanently removes every soft-deleted project.
    ///
    /// Returns the number of removed rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn purge_trashed(&self) -> Result<u64, AppError>;
}
