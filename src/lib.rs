//! MEDDoC Directory - backend access layer for the MEDDoC healthcare
//! directory and content-management site.
//!
//! This library provides the typed data layer between the MEDDoC admin and
//! public surfaces and the hosted platform: models for every directory
//! entity, a client for the platform's record store and object storage,
//! repository abstractions, and services enforcing the domain rules
//! (canonical `+261` phone numbers, the fixed pharmacy service vocabulary).
//!
//! # Architecture
//!
//! - **domain**: validated value objects (phone numbers, service lists)
//! - **models**: data structures for pharmacies, ambulances, partners,
//!   messages, social links, site info, and documents
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **client**: HTTP client for the hosted record store and object storage
//! - **repositories**: storage abstractions over the client
//! - **services**: business logic and input validation
//! - **metrics**: request counters for the client

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;

pub use client::{AsyncStoreClient, StoreClient};
pub use config::Config;
pub use domain::{PhoneNumber, ValidationError};
pub use error::{ConfigError, StoreApiError};
pub use metrics::Metrics;
pub use models::{
    Ambulance, ContactMessage, DocumentFile, Partner, Pharmacy, SiteInfo, SocialLink,
};
pub use services::{
    AmbulanceService, AmbulanceServiceImpl, DocumentService, DocumentServiceImpl, MessageService,
    MessageServiceImpl, PharmacyService, PharmacyServiceImpl, SiteService, SiteServiceImpl,
};
