use crate::error::StoreApiResult;
use crate::models::*;
use async_trait::async_trait;

/// Repository for managing pharmacies.
///
/// Provides abstraction over pharmacy storage and retrieval,
/// enabling different implementations (REST client, mock).
#[async_trait]
pub trait PharmacyRepository: Send + Sync {
    /// Retrieve a single pharmacy by id.
    async fn get(&self, id: i64) -> StoreApiResult<Pharmacy>;

    /// Retrieve pharmacies with pagination.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>>;

    /// Retrieve pharmacies currently on the duty rotation.
    async fn list_on_duty(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>>;

    /// Search pharmacies by city.
    async fn search_by_city(
        &self,
        city: &str,
        limit: usize,
        offset: usize,
    ) -> StoreApiResult<Vec<Pharmacy>>;

    /// Create a new pharmacy.
    async fn create(&self, pharmacy: &NewPharmacy) -> StoreApiResult<Pharmacy>;

    /// Apply a partial change set to a pharmacy.
    async fn update(&self, id: i64, changes: &PharmacyChanges) -> StoreApiResult<Pharmacy>;

    /// Delete a pharmacy.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Repository for managing ambulance records.
#[async_trait]
pub trait AmbulanceRepository: Send + Sync {
    /// Retrieve a single ambulance by id.
    async fn get(&self, id: i64) -> StoreApiResult<Ambulance>;

    /// Retrieve ambulances with pagination.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Ambulance>>;

    /// Create a new ambulance record.
    async fn create(&self, ambulance: &NewAmbulance) -> StoreApiResult<Ambulance>;

    /// Apply a partial change set to an ambulance record.
    async fn update(&self, id: i64, changes: &AmbulanceChanges) -> StoreApiResult<Ambulance>;

    /// Delete an ambulance record.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Repository for managing partners.
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    /// Retrieve partners with pagination.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Partner>>;

    /// Create a new partner.
    async fn create(&self, partner: &NewPartner) -> StoreApiResult<Partner>;

    /// Apply a partial change set to a partner.
    async fn update(&self, id: i64, changes: &PartnerChanges) -> StoreApiResult<Partner>;

    /// Delete a partner.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Repository for contact-form messages.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Retrieve messages, most recent first.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<ContactMessage>>;

    /// Store a newly submitted message.
    async fn create(&self, message: &NewContactMessage) -> StoreApiResult<ContactMessage>;

    /// Mark a message as read.
    async fn mark_read(&self, id: i64) -> StoreApiResult<ContactMessage>;

    /// Delete a message.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Repository for the site-info singleton and social links.
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// Fetch the site-info singleton.
    async fn get_site_info(&self) -> StoreApiResult<SiteInfo>;

    /// Apply a partial change set to the site-info singleton.
    async fn update_site_info(&self, id: i64, changes: &SiteInfoChanges) -> StoreApiResult<SiteInfo>;

    /// Retrieve social links with pagination.
    async fn list_social_links(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<SocialLink>>;

    /// Create a new social link.
    async fn create_social_link(&self, link: &NewSocialLink) -> StoreApiResult<SocialLink>;

    /// Delete a social link.
    async fn delete_social_link(&self, id: i64) -> StoreApiResult<()>;
}

/// Repository for the documents library (metadata rows + object storage).
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Retrieve document metadata rows with pagination.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<DocumentFile>>;

    /// Retrieve a single document metadata row by id.
    async fn get(&self, id: i64) -> StoreApiResult<DocumentFile>;

    /// Insert a document metadata row.
    async fn create(&self, document: &NewDocumentFile) -> StoreApiResult<DocumentFile>;

    /// Delete a document metadata row.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;

    /// Upload the file bytes behind a document.
    async fn upload_object(
        &self,
        object_path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> StoreApiResult<()>;

    /// Delete the file behind a document.
    async fn delete_object(&self, object_path: &str) -> StoreApiResult<()>;

    /// Public download URL for an object.
    fn public_url(&self, object_path: &str) -> String;
}
