//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions with the
//! repositories. They are the boundary where free-form admin input becomes
//! validated, canonical data: phone numbers are normalized and service tags
//! checked against the vocabulary before anything is persisted.

mod ambulance_service;
mod document_service;
mod message_service;
mod pharmacy_service;
mod site_service;

pub use ambulance_service::{
    AmbulanceService, AmbulanceServiceImpl, CreateAmbulanceParams, UpdateAmbulanceParams,
};
pub use document_service::{DocumentService, DocumentServiceImpl, UploadDocumentParams};
pub use message_service::{MessageService, MessageServiceImpl, SubmitMessageParams};
pub use pharmacy_service::{
    CreatePharmacyParams, PharmacyService, PharmacyServiceImpl, UpdatePharmacyParams,
};
pub use site_service::{SiteService, SiteServiceImpl, UpdateSiteInfoParams};
