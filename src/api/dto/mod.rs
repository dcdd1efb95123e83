//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies derive `Deserialize` + `validator::Validate`; responses are
//! plain `Serialize` structs carrying their `_links`.

pub mod customer;
pub mod envelope;
pub mod health;
pub mod pagination;
pub mod project;

pub use customer::{CustomerRequest, CustomerResource};
pub use envelope::{CollectionEnvelope, DeletedResponse, PageMeta, SortMeta};
pub use pagination::ListParams;
pub use project::{ProjectRequest, ProjectResource};
