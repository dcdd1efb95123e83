//! Process-local storage backend.
//!
//! Mirrors the PostgreSQL schema closely enough that the API behaves the same
//! on both backends: ids are sequential, project names are unique across live
//! and deleted rows, `customer_id` must reference an existing customer and is
//! cleared when that customer is deleted, and sorting by a name that is not a
//! column fails the query. Data lives for the lifetime of the process.

mod customer_repository;
mod project_repository;

pub use customer_repository::InMemoryCustomerRepository;
pub use project_repository::InMemoryProjectRepository;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Customer, Project};
use crate::domain::listing::{ListQuery, SortDirection};
use crate::error::AppError;

/// Shared tables for the in-memory repositories.
///
/// Both repositories hold an `Arc` to the same store so cross-table rules
/// (foreign keys, `ON DELETE SET NULL`) can be applied atomically.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Default)]
struct Tables {
    customers: BTreeMap<i64, Customer>,
    projects: BTreeMap<i64, Project>,
    customer_seq: i64,
    project_seq: i64,
}

impl Tables {
    fn next_customer_id(&mut self) -> i64 {
        self.customer_seq += 1;
        self.customer_seq
    }

    fn next_project_id(&mut self) -> i64 {
        self.project_seq += 1;
        self.project_seq
    }
}

/// A single column value, ordered the way PostgreSQL orders it:
/// NULLs sort after every non-null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Column<'a> {
    Int(i64),
    Text(&'a str),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Null,
}

impl<'a, T> From<Option<T>> for Column<'a>
where
    T: Into<Column<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Column::Null, Into::into)
    }
}

impl From<i64> for Column<'_> {
    fn from(v: i64) -> Self {
        Column::Int(v)
    }
}

impl<'a> From<&'a str> for Column<'a> {
    fn from(v: &'a str) -> Self {
        Column::Text(v)
    }
}

impl From<NaiveDate> for Column<'_> {
    fn from(v: NaiveDate) -> Self {
        Column::Date(v)
    }
}

impl From<DateTime<Utc>> for Column<'_> {
    fn from(v: DateTime<Utc>) -> Self {
        Column::Timestamp(v)
    }
}

/// Column access for sortable rows.
trait Row: Clone {
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    /// Value of a column listed in `COLUMNS`.
    fn column(&self, name: &str) -> Column<'_>;
}

impl Row for Customer {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "date_of_birth",
        "email",
        "created_at",
        "updated_at",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn column(&self, name: &str) -> Column<'_> {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "date_of_birth" => self.date_of_birth.into(),
            "email" => self.email.as_deref().into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            _ => Column::Null,
        }
    }
}

impl Row for Project {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "customer_id",
        "created_at",
        "updated_at",
        "deleted_at",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn column(&self, name: &str) -> Column<'_> {
        match name {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "description" => self.description.as_deref().into(),
            "customer_id" => self.customer_id.into(),
            "created_at" => self.created_at.into(),
            "updated_at" => self.updated_at.into(),
            "deleted_at" => self.deleted_at.into(),
            _ => Column::Null,
        }
    }
}

/// Orders, offsets and limits rows according to `query`.
///
/// Rows must arrive in id order; without a sort field that order is kept.
fn paginate<'a, T>(rows: impl Iterator<Item = &'a T>, query: &ListQuery) -> Result<Vec<T>, AppError>
where
    T: Row + 'a,
{
    let mut rows: Vec<&T> = rows.collect();

    if let Some(sort) = query.sort() {
        if !T::COLUMNS.contains(&sort.field.as_str()) {
            tracing::error!(column = %sort.field, "Database error: column does not exist");
            return Err(AppError::internal("Database error", json!({})));
        }

        rows.sort_by(|a, b| {
            let ord = a.column(&sort.field).cmp(&b.column(&sort.field));
            let ord = match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            };
            ord.then_with(|| a.id().cmp(&b.id()))
        });
    }

    let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(query.limit()).unwrap_or(0);

    Ok(rows.into_iter().skip(offset).take(limit).cloned().collect())
}
