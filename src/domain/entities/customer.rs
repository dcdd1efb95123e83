//! Customer entity.

use chrono::{DateTime, NaiveDate, Utc};

/// A customer that projects can be assigned to.
///
/// Customers are hard-deleted; projects that referenced a removed customer
/// keep existing with an empty `customer_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Creates a new Customer instance.
    pub fn new(
        id: i64,
        name: String,
        date_of_birth: Option<NaiveDate>,
        email: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            date_of_birth,
            email,
            created_at,
            updated_at,
        }
    }

    /// Applies a partial update in place, leaving `None` fields untouched.
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Input data for creating a new customer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

/// Partial update for an existing customer.
///
/// `None` fields are left unchanged. `Some(None)` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub date_of_birth: Option<Option<NaiveDate>>,
    pub email: Option<Option<String>>,
}
