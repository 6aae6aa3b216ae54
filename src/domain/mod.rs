//! Domain value objects and types.
//!
//! This module contains the validated domain concepts of the directory:
//! canonical phone numbers and the semicolon-delimited pharmacy service
//! list. Value objects validate at construction time so invalid data never
//! reaches the persistence layer.

pub mod errors;
pub mod phone;
pub mod service_list;

pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use service_list::{
    ServiceValidation, DEFAULT_MAX_DISPLAY, NO_SERVICES_PLACEHOLDER, SERVICE_DELIMITER,
    SERVICE_VOCABULARY,
};
