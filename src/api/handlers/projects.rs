//! Handlers for project endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::{
    CollectionEnvelope, DeletedResponse, ListParams, ProjectRequest, ProjectResource,
};
use crate::api::extract::{ResourceId, ValidatedJson};
use crate::api::hateoas::PROJECTS;
use crate::error::AppError;
use crate::state::AppState;

/// Lists live projects, one page at a time.
///
/// # Endpoint
///
/// `GET /projects?page=&per_page=&sort=&direction=`
///
/// Out-of-range or malformed paging values fall back to their defaults.
/// Sorting by a column that does not exist yields 500.
pub async fn list_projects_handler(
    State(state): State<AppState>,
    params: ListParams,
) -> Result<Json<CollectionEnvelope<ProjectResource>>, AppError> {
    let query = params.into_query();
    let page = state.project_service.list_projects(&query).await?;

    let links = &state.links;
    let page = page.map(|project| ProjectResource::new(project, links));

    Ok(Json(CollectionEnvelope::new(PROJECTS, page, &query, links)))
}

/// Creates a project.
///
/// # Endpoint
///
/// `POST /projects`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Apollo",                           // required, unique
///   "description": "Lunar landing programme",   // optional, min 10 chars
///   "customer_id": 3                            // optional, must exist
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failure, including a taken name.
pub async fn create_project_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResource>), AppError> {
    let project = state
        .project_service
        .create_project(payload.into_new_project())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectResource::new(project, &state.links)),
    ))
}

/// Returns a single project.
///
/// # Endpoint
///
/// `GET /projects/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the project does not exist or was deleted.
pub async fn show_project_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<ProjectResource>, AppError> {
    let project = state.project_service.get_project(id).await?;

    Ok(Json(ProjectResource::new(project, &state.links)))
}

/// Updates a project.
///
/// # Endpoint
///
/// `PUT /projects/{id}`
///
/// `name` is required. Absent `description`/`customer_id` keep their stored
/// values; `null` clears them.
///
/// # Errors
///
/// Returns 404 Not Found if the project does not exist.
/// Returns 400 Bad Request on validation failure.
pub async fn update_project_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(payload): ValidatedJson<ProjectRequest>,
) -> Result<Json<ProjectResource>, AppError> {
    let project = state
        .project_service
        .update_project(id, payload.into_patch())
        .await?;

    Ok(Json(ProjectResource::new(project, &state.links)))
}

/// Soft-deletes a project.
///
/// # Endpoint
///
/// `DELETE /projects/{id}`
///
/// # Response
///
/// ```json
/// {
///   "message": "Project deleted successfully",
///   "_links": {
///     "list": { "href": "http://localhost:3000/projects" },
///     "create": { "method": "POST", "href": "http://localhost:3000/projects" }
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the project does not exist or is already deleted.
pub async fn delete_project_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<DeletedResponse>, AppError> {
    state.project_service.delete_project(id).await?;

    Ok(Json(DeletedResponse::new(PROJECTS, &state.links)))
}
