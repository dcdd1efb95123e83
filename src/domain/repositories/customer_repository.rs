//! Repository trait for customer data access.

use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};
use crate::domain::listing::ListQuery;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - process-local storage
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Inserts a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Fetches one page of customers.
    ///
    /// The sort field is not checked against known columns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the sort field does not name a column
    /// or on storage errors.
    async fn list(&self, query: &ListQuery) -> Result<Vec<Customer>, AppError>;

    /// Counts all customers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update.
    ///
    /// Returns `Ok(None)` if the customer does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, patch: CustomerPatch) -> Result<Option<Customer>, AppError>;

    /// Removes a customer permanently.
    ///
    /// Projects that referenced the customer lose the reference.
    /// Returns `Ok(false)` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
