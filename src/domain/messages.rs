//! Field-level validation messages shared by request DTOs, services and
//! repositories.

pub const NAME_REQUIRED: &str = "The name field is required.";
pub const NAME_LENGTH: &str = "The name must be between 1 and 255 characters.";
pub const NAME_TAKEN: &str = "The name has already been taken.";
pub const DESCRIPTION_MIN: &str = "The description must be at least 10 characters.";
pub const EMAIL_INVALID: &str = "The email must be a valid email address.";
pub const EMAIL_LENGTH: &str = "The email may not be greater than 254 characters.";
pub const CUSTOMER_INVALID: &str = "The selected customer id is invalid.";
