//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::api::dto::{
    CollectionEnvelope, CustomerRequest, CustomerResource, DeletedResponse, ListParams,
};
use crate::api::extract::{ResourceId, ValidatedJson};
use crate::api::hateoas::CUSTOMERS;
use crate::error::AppError;
use crate::state::AppState;

/// Lists customers.
///
/// `GET /customers?page=&per_page=&sort=&direction=`
pub async fn list_customers_handler(
    State(state): State<AppState>,
    params: ListParams,
) -> Result<Json<CollectionEnvelope<CustomerResource>>, AppError> {
    let query = params.into_query();
    let page = state.customer_service.list_customers(&query).await?;

    let links = &state.links;
    let page = page.map(|customer| CustomerResource::new(customer, links));

    Ok(Json(CollectionEnvelope::new(CUSTOMERS, page, &query, links)))
}

/// Creates a customer.
///
/// `POST /customers` with `{ "name", "date_of_birth"?, "email"? }`.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResource>), AppError> {
    let customer = state
        .customer_service
        .create_customer(payload.into_new_customer())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CustomerResource::new(customer, &state.links)),
    ))
}

/// `GET /customers/{id}`
pub async fn show_customer_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<CustomerResource>, AppError> {
    let customer = state.customer_service.get_customer(id).await?;

    Ok(Json(CustomerResource::new(customer, &state.links)))
}

/// `PUT /customers/{id}`
pub async fn update_customer_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    ValidatedJson(payload): ValidatedJson<CustomerRequest>,
) -> Result<Json<CustomerResource>, AppError> {
    let customer = state
        .customer_service
        .update_customer(id, payload.into_patch())
        .await?;

    Ok(Json(CustomerResource::new(customer, &state.links)))
}

/// Deletes a customer permanently. Their projects are kept, unassigned.
///
/// `DELETE /customers/{id}`
pub async fn delete_customer_handler(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> Result<Json<DeletedResponse>, AppError> {
    state.customer_service.delete_customer(id).await?;

    Ok(Json(DeletedResponse::new(CUSTOMERS, &state.links)))
}
