//! Customer management service.

use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};
use crate::domain::listing::{ListQuery, Page};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for customer CRUD operations.
///
/// Field rules that need no storage (required name, email format) are enforced
/// by the request DTOs; this layer turns missing rows into
/// [`AppError::NotFound`].
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    /// Creates a new customer service.
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let customer = self.repository.create(new_customer).await?;
        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_customer(&self, id: i64) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Fetches one page of customers together with the total count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] for unknown sort fields or storage errors.
    pub async fn list_customers(&self, query: &ListQuery) -> Result<Page<Customer>, AppError> {
        let (items, total) =
            tokio::try_join!(self.repository.list(query), self.repository.count())?;

        Ok(Page::new(items, query, total))
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_customer(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<Customer, AppError> {
        self.repository
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Permanently deletes a customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_customer(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(customer_id = id, "Customer deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Customer not found", json!({ "id": id }))
}
