mod rest_ambulance_repository;
mod rest_document_repository;
mod rest_message_repository;
mod rest_partner_repository;
mod rest_pharmacy_repository;
mod rest_site_repository;
mod traits;

pub use rest_ambulance_repository::RestAmbulanceRepository;
pub use rest_document_repository::RestDocumentRepository;
pub use rest_message_repository::RestMessageRepository;
pub use rest_partner_repository::RestPartnerRepository;
pub use rest_pharmacy_repository::RestPharmacyRepository;
pub use rest_site_repository::RestSiteRepository;
pub use traits::{
    AmbulanceRepository, DocumentRepository, MessageRepository, PartnerRepository,
    PharmacyRepository, SiteRepository,
};
