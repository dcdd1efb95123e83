//! Customer request and resource representations.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::hateoas::{CUSTOMERS, LinkBuilder, ResourceLinks};
use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};

/// Request body for `POST /customers` and `PUT /customers/{id}`.
///
/// `date_of_birth` is a `YYYY-MM-DD` date. Absent nullable fields are left
/// unchanged on update, `null` clears them.
#[derive(Debug, Deserialize, Validate)]
pub struct CustomerRequest {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name must be between 1 and 255 characters.")
    )]
    pub name: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub date_of_birth: Option<Option<NaiveDate>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(
        email(message = "The email must be a valid email address."),
        length(max = 254, message = "The email may not be greater than 254 characters.")
    )]
    pub email: Option<Option<String>>,
}

impl CustomerRequest {
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            name: self.name.unwrap_or_default(),
            date_of_birth: self.date_of_birth.flatten(),
            email: self.email.flatten(),
        }
    }

    pub fn into_patch(self) -> CustomerPatch {
        CustomerPatch {
            name: self.name,
            date_of_birth: self.date_of_birth,
            email: self.email,
        }
    }
}

/// Public JSON representation of a customer.
#[derive(Debug, Serialize)]
pub struct CustomerResource {
    pub id: i64,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "_links")]
    pub links: ResourceLinks,
}

impl CustomerResource {
    pub fn new(customer: Customer, links: &LinkBuilder) -> Self {
        Self {
            links: links.resource_links(CUSTOMERS, customer.id),
            id: customer.id,
            name: customer.name,
            date_of_birth: customer.date_of_birth,
            email: customer.email,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}
