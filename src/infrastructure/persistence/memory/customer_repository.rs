use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::{MemoryStore, paginate};
use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};
use crate::domain::listing::ListQuery;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// In-memory repository for customers.
pub struct InMemoryCustomerRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryCustomerRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let mut tables = self.store.tables.write().await;
        let now = Utc::now();
        let id = tables.next_customer_id();

        let customer = Customer::new(
            id,
            new_customer.name,
            new_customer.date_of_birth,
            new_customer.email,
            now,
            now,
        );
        tables.customers.insert(id, customer.clone());

        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        Ok(self.store.tables.read().await.customers.get(&id).cloned())
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Customer>, AppError> {
        let tables = self.store.tables.read().await;
        paginate(tables.customers.values(), query)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let tables = self.store.tables.read().await;
        Ok(i64::try_from(tables.customers.len()).unwrap_or(i64::MAX))
    }

    async fn update(&self, id: i64, patch: CustomerPatch) -> Result<Option<Customer>, AppError> {
        let mut tables = self.store.tables.write().await;

        let Some(customer) = tables.customers.get_mut(&id) else {
            return Ok(None);
        };
        customer.apply(patch);
        customer.updated_at = Utc::now();

        Ok(Some(customer.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.store.tables.write().await;

        if tables.customers.remove(&id).is_none() {
            return Ok(false);
        }

        for project in tables.projects.values_mut() {
            if project.customer_id == Some(id) {
                project.customer_id = None;
            }
        }

        Ok(true)
    }
}
