//! PostgreSQL implementation of the project repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use super::sql;
use crate::domain::entities::{NewProject, Project, ProjectPatch};
use crate::domain::listing::ListQuery;
use crate::domain::messages;
use crate::domain::repositories::ProjectRepository;
use crate::error::AppError;
use crate::utils::db_error::{is_foreign_key_violation_on, is_unique_violation_on};

const PROJECT_COLUMNS: &str =
    "id, name, description, customer_id, created_at, updated_at, deleted_at";

const NAME_CONSTRAINT: &str = "projects_name_key";
const CUSTOMER_CONSTRAINT: &str = "projects_customer_id_fkey";

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    description: Option<String>,
    customer_id: Option<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl From<ProjectRow> for Project {
    fn from(r: ProjectRow) -> Self {
        Project::new(
            r.id,
            r.name,
            r.description,
            r.customer_id,
            r.created_at,
            r.updated_at,
            r.deleted_at,
        )
    }
}

/// Maps constraint failures on writes to field-level validation errors.
///
/// The service checks both rules before writing; this covers concurrent
/// writers racing past those checks.
fn map_write_error(e: sqlx::Error) -> AppError {
    if is_unique_violation_on(&e, NAME_CONSTRAINT) {
        return AppError::invalid_field("name", messages::NAME_TAKEN);
    }
    if is_foreign_key_violation_on(&e, CUSTOMER_CONSTRAINT) {
        return AppError::invalid_field("customer_id", messages::CUSTOMER_INVALID);
    }
    e.into()
}

/// PostgreSQL repository for projects.
///
/// Uses soft delete: `deleted_at IS NOT NULL` means deleted.
pub struct PgProjectRepository {
    pool: Arc<PgPool>,
}

impl PgProjectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(&self, new_project: NewProject) -> Result<Project, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "INSERT INTO projects (name, description, customer_id) VALUES ($1, $2, $3) RETURNING {PROJECT_COLUMNS}"
        ))
        .bind(new_project.name)
        .bind(new_project.description)
        .bind(new_project.customer_id)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Project::from))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Project>, AppError> {
        // Does NOT filter deleted_at: deleted projects keep their name reserved.
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE name = $1"
        ))
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Project::from))
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE deleted_at IS NULL"
        ));
        sql::push_page(&mut builder, query);

        let rows = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects WHERE deleted_at IS NULL")
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: ProjectPatch) -> Result<Option<Project>, AppError> {
        let update_description = patch.description.is_some();
        let new_description = patch.description.flatten();
        let update_customer = patch.customer_id.is_some();
        let new_customer = patch.customer_id.flatten();

        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            r#"
            UPDATE projects SET
                name        = COALESCE($2::TEXT, name),
                description = CASE WHEN $3 THEN $4::TEXT ELSE description END,
                customer_id = CASE WHEN $5 THEN $6::BIGINT ELSE customer_id END,
                updated_at  = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING {PROJECT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(update_description)
        .bind(new_description)
        .bind(update_customer)
        .bind(new_customer)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_write_error)?;

        Ok(row.map(Project::from))
    }

    async fn soft_delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE projects SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_trashed(&self) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE deleted_at IS NOT NULL ORDER BY deleted_at DESC, id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn restore(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE projects SET deleted_at = NULL, updated_at = NOW() WHERE id = $1 AND deleted_at IS NOT NULL",
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn purge_trashed(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE deleted_at IS NOT NULL")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
