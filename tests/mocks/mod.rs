//! In-memory mock repositories shared by the integration tests.

pub mod mock_ambulance_repository;
pub mod mock_document_repository;
pub mod mock_message_repository;
pub mod mock_partner_repository;
pub mod mock_pharmacy_repository;
pub mod mock_site_repository;

#[allow(unused_imports)]
pub use mock_ambulance_repository::MockAmbulanceRepository;
#[allow(unused_imports)]
pub use mock_document_repository::MockDocumentRepository;
#[allow(unused_imports)]
pub use mock_message_repository::MockMessageRepository;
#[allow(unused_imports)]
pub use mock_partner_repository::MockPartnerRepository;
#[allow(unused_imports)]
pub use mock_pharmacy_repository::MockPharmacyRepository;
#[allow(unused_imports)]
pub use mock_site_repository::MockSiteRepository;

/// Initialize tracing output for tests. Safe to call repeatedly; honors
/// `RUST_LOG`.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
