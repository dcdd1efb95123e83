//! Utility functions shared across layers.
//!
//! - [`db_error`] - PostgreSQL constraint violation classification

pub mod db_error;
