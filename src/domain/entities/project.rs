//! Project entity.

use chrono::{DateTime, Utc};

/// A project, optionally owned by a customer.
///
/// Projects are soft-deleted: `deleted_at` is set instead of removing the row,
/// and deleted projects are invisible to every API read path. The name stays
/// reserved after deletion.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub customer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Creates a new Project instance.
    pub fn new(
        id: i64,
        name: String,
        description: Option<String>,
        customer_id: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            customer_id,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    /// Returns true if the project has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Applies a partial update in place, leaving `None` fields untouched.
    pub fn apply(&mut self, patch: ProjectPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(customer_id) = patch.customer_id {
            self.customer_id = customer_id;
        }
    }
}

/// Input data for creating a new project.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub customer_id: Option<i64>,
}

/// Partial update for an existing project.
///
/// `None` fields are left unchanged.
/// `description: Some(None)` clears the description; `Some(Some(s))` sets it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub customer_id: Option<Option<i64>>,
}
