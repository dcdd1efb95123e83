//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, QueryBuilder};
use std::sync::Arc;

use super::sql;
use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};
use crate::domain::listing::ListQuery;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

const CUSTOMER_COLUMNS: &str = "id, name, date_of_birth, email, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    name: String,
    date_of_birth: Option<NaiveDate>,
    email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Customer::new(
            r.id,
            r.name,
            r.date_of_birth,
            r.email,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for customers.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "INSERT INTO customers (name, date_of_birth, email) VALUES ($1, $2, $3) RETURNING {CUSTOMER_COLUMNS}"
        ))
        .bind(new_customer.name)
        .bind(new_customer.date_of_birth)
        .bind(new_customer.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn list(&self, query: &ListQuery) -> Result<Vec<Customer>, AppError> {
        let mut builder =
            QueryBuilder::new(format!("SELECT {CUSTOMER_COLUMNS} FROM customers"));
        sql::push_page(&mut builder, query);

        let rows = builder
            .build_query_as::<CustomerRow>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: CustomerPatch) -> Result<Option<Customer>, AppError> {
        let update_date_of_birth = patch.date_of_birth.is_some();
        let new_date_of_birth = patch.date_of_birth.flatten();
        let update_email = patch.email.is_some();
        let new_email = patch.email.flatten();

        let row = sqlx::query_as::<_, CustomerRow>(&format!(
            r#"
            UPDATE customers SET
                name          = COALESCE($2::TEXT, name),
                date_of_birth = CASE WHEN $3 THEN $4::DATE ELSE date_of_birth END,
                email         = CASE WHEN $5 THEN $6::TEXT ELSE email END,
                updated_at    = NOW()
            WHERE id = $1
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(update_date_of_birth)
        .bind(new_date_of_birth)
        .bind(update_email)
        .bind(new_email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
