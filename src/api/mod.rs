//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and renders
//! responses with hypermedia links.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Validating JSON body extractor
//! - [`handlers`] - HTTP request handlers
//! - [`hateoas`] - Link generation for resources and collections
//! - [`middleware`] - Rate limiting and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod hateoas;
pub mod middleware;
pub mod routes;
