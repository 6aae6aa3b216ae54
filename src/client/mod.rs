//! HTTP client for the hosted platform backing the MEDDoC directory.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles
//! authentication, error mapping, and the PostgREST-style record conventions
//! of the hosted store, plus its object-storage API for the documents
//! library.

mod async_wrapper;
pub use async_wrapper::AsyncStoreClient;

use crate::config::Config;
use crate::error::{StoreApiError, StoreApiResult};
use crate::metrics::Metrics;
use crate::models::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Record-store table names.
mod tables {
    pub const PHARMACIES: &str = "pharmacies";
    pub const AMBULANCES: &str = "ambulances";
    pub const PARTNERS: &str = "partners";
    pub const MESSAGES: &str = "messages";
    pub const SOCIAL_LINKS: &str = "social_links";
    pub const SITE_INFO: &str = "site_info";
    pub const DOCUMENTS: &str = "documents";
}

/// HTTP client for the hosted record store and object storage.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct StoreClient {
    /// Base URL of the hosted platform
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// Storage bucket holding the documents library
    storage_bucket: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl StoreClient {
    /// Create a new StoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            storage_bucket: config.storage_bucket.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a StoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            storage_bucket: "documents".to_string(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Attach the platform auth headers to a request.
    fn authed(&self, request: ureq::Request) -> ureq::Request {
        request
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.api_key))
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, StoreApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .authed(self.agent.get(&url))
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a POST request with authentication and JSON body.
    ///
    /// Sends `Prefer: return=representation` so the store echoes the
    /// created row back.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let result = self
            .authed(self.agent.post(&url))
            .set("Content-Type", "application/json")
            .set("Prefer", "return=representation")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Execute a PATCH request with authentication and JSON body.
    fn patch(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, StoreApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .authed(self.agent.request("PATCH", &url))
            .set("Content-Type", "application/json")
            .set("Prefer", "return=representation")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a DELETE request with authentication.
    fn delete(&self, path: &str) -> Result<ureq::Response, StoreApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        let result = self
            .authed(self.agent.delete(&url))
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to a StoreApiError.
    fn map_error(&self, error: ureq::Error) -> StoreApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => StoreApiError::Unauthorized,
                    404 => StoreApiError::NotFound(message),
                    429 => StoreApiError::RateLimitExceeded,
                    _ => StoreApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreApiError::Timeout
                } else {
                    StoreApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    // ========================= Record API core =========================

    /// Parse a response body as a JSON array of rows.
    fn parse_rows<T: DeserializeOwned>(response: ureq::Response) -> StoreApiResult<Vec<T>> {
        let body = response
            .into_string()
            .map_err(|e| StoreApiError::HttpError(e.to_string()))?;
        serde_json::from_str(&body).map_err(StoreApiError::JsonError)
    }

    /// Parse a response body as a single row, taken from a one-element array.
    ///
    /// The store returns arrays even for single-row filters and for writes
    /// with `return=representation`; an empty array means the filter matched
    /// nothing.
    fn parse_single_row<T: DeserializeOwned>(
        response: ureq::Response,
        what: &str,
    ) -> StoreApiResult<T> {
        let rows: Vec<T> = Self::parse_rows(response)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreApiError::NotFound(what.to_string()))
    }

    /// List rows from a table with pagination, ordered by id.
    fn list_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        limit: usize,
        offset: usize,
    ) -> StoreApiResult<Vec<T>> {
        let path = format!(
            "/rest/v1/{}?order=id.asc&limit={}&offset={}",
            table, limit, offset
        );
        let rows: Vec<T> = Self::parse_rows(self.get(&path)?)?;
        self.metrics.record_records_fetched(rows.len());
        Ok(rows)
    }

    /// Fetch a single row by id.
    fn get_row<T: DeserializeOwned>(&self, table: &str, id: i64) -> StoreApiResult<T> {
        let path = format!("/rest/v1/{}?id=eq.{}&limit=1", table, id);
        let row = Self::parse_single_row(self.get(&path)?, &format!("{} id {}", table, id))?;
        self.metrics.record_records_fetched(1);
        Ok(row)
    }

    /// Insert a row, returning the created row.
    fn insert_row<T: DeserializeOwned>(
        &self,
        table: &str,
        payload: &impl Serialize,
    ) -> StoreApiResult<T> {
        let body = serde_json::to_value(payload).map_err(StoreApiError::JsonError)?;
        let path = format!("/rest/v1/{}", table);
        let row = Self::parse_single_row(self.post(&path, &body)?, table)?;
        self.metrics.record_record_written();
        Ok(row)
    }

    /// Apply a partial change set to a row, returning the updated row.
    fn update_row<T: DeserializeOwned>(
        &self,
        table: &str,
        id: i64,
        changes: &impl Serialize,
    ) -> StoreApiResult<T> {
        let body = serde_json::to_value(changes).map_err(StoreApiError::JsonError)?;
        let path = format!("/rest/v1/{}?id=eq.{}", table, id);
        let row = Self::parse_single_row(self.patch(&path, &body)?, &format!("{} id {}", table, id))?;
        self.metrics.record_record_written();
        Ok(row)
    }

    /// Delete a row by id.
    fn delete_row(&self, table: &str, id: i64) -> StoreApiResult<()> {
        let path = format!("/rest/v1/{}?id=eq.{}", table, id);
        self.delete(&path)?;
        Ok(())
    }

    // ========================= Pharmacy Operations =========================

    /// List pharmacies with pagination.
    pub fn get_pharmacies(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        self.list_rows(tables::PHARMACIES, limit, offset)
    }

    /// Get a single pharmacy by id.
    pub fn get_pharmacy(&self, id: i64) -> StoreApiResult<Pharmacy> {
        self.get_row(tables::PHARMACIES, id)
    }

    /// Search pharmacies by city (case-insensitive substring match).
    pub fn search_pharmacies_by_city(
        &self,
        city: &str,
        limit: usize,
        offset: usize,
    ) -> StoreApiResult<Vec<Pharmacy>> {
        let pattern = urlencoding::encode_binary(format!("*{}*", city).as_bytes()).into_owned();
        let path = format!(
            "/rest/v1/{}?city=ilike.{}&order=id.asc&limit={}&offset={}",
            tables::PHARMACIES,
            pattern,
            limit,
            offset
        );
        let rows: Vec<Pharmacy> = Self::parse_rows(self.get(&path)?)?;
        self.metrics.record_records_fetched(rows.len());
        Ok(rows)
    }

    /// List pharmacies currently on the duty rotation.
    pub fn get_on_duty_pharmacies(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Pharmacy>> {
        let path = format!(
            "/rest/v1/{}?on_duty=is.true&order=id.asc&limit={}&offset={}",
            tables::PHARMACIES,
            limit,
            offset
        );
        let rows: Vec<Pharmacy> = Self::parse_rows(self.get(&path)?)?;
        self.metrics.record_records_fetched(rows.len());
        Ok(rows)
    }

    /// Create a new pharmacy.
    pub fn create_pharmacy(&self, pharmacy: &NewPharmacy) -> StoreApiResult<Pharmacy> {
        self.insert_row(tables::PHARMACIES, pharmacy)
    }

    /// Update an existing pharmacy.
    pub fn update_pharmacy(&self, id: i64, changes: &PharmacyChanges) -> StoreApiResult<Pharmacy> {
        self.update_row(tables::PHARMACIES, id, changes)
    }

    /// Delete a pharmacy.
    pub fn delete_pharmacy(&self, id: i64) -> StoreApiResult<()> {
        self.delete_row(tables::PHARMACIES, id)
    }

    // ========================= Ambulance Operations =========================

    /// List ambulances with pagination.
    pub fn get_ambulances(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Ambulance>> {
        self.list_rows(tables::AMBULANCES, limit, offset)
    }

    /// Get a single ambulance by id.
    pub fn get_ambulance(&self, id: i64) -> StoreApiResult<Ambulance> {
        self.get_row(tables::AMBULANCES, id)
    }

    /// Create a new ambulance record.
    pub fn create_ambulance(&self, ambulance: &NewAmbulance) -> StoreApiResult<Ambulance> {
        self.insert_row(tables::AMBULANCES, ambulance)
    }

    /// Update an existing ambulance record.
    pub fn update_ambulance(&self, id: i64, changes: &AmbulanceChanges) -> StoreApiResult<Ambulance> {
        self.update_row(tables::AMBULANCES, id, changes)
    }

    /// Delete an ambulance record.
    pub fn delete_ambulance(&self, id: i64) -> StoreApiResult<()> {
        self.delete_row(tables::AMBULANCES, id)
    }

    // ========================= Partner Operations =========================

    /// List partners with pagination.
    pub fn get_partners(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<Partner>> {
        self.list_rows(tables::PARTNERS, limit, offset)
    }

    /// Create a new partner.
    pub fn create_partner(&self, partner: &NewPartner) -> StoreApiResult<Partner> {
        self.insert_row(tables::PARTNERS, partner)
    }

    /// Update an existing partner.
    pub fn update_partner(&self, id: i64, changes: &PartnerChanges) -> StoreApiResult<Partner> {
        self.update_row(tables::PARTNERS, id, changes)
    }

    /// Delete a partner.
    pub fn delete_partner(&self, id: i64) -> StoreApiResult<()> {
        self.delete_row(tables::PARTNERS, id)
    }

    // ========================= Message Operations =========================

    /// List contact messages, most recent first.
    pub fn get_messages(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<ContactMessage>> {
        let path = format!(
            "/rest/v1/{}?order=created_at.desc&limit={}&offset={}",
            tables::MESSAGES,
            limit,
            offset
        );
        let rows: Vec<ContactMessage> = Self::parse_rows(self.get(&path)?)?;
        self.metrics.record_records_fetched(rows.len());
        Ok(rows)
    }

    /// Submit a new contact message.
    pub fn create_message(&self, message: &NewContactMessage) -> StoreApiResult<ContactMessage> {
        self.insert_row(tables::MESSAGES, message)
    }

    /// Mark a message as read.
    pub fn mark_message_read(&self, id: i64) -> StoreApiResult<ContactMessage> {
        self.update_row(tables::MESSAGES, id, &serde_json::json!({ "read": true }))
    }

    /// Delete a message.
    pub fn delete_message(&self, id: i64) -> StoreApiResult<()> {
        self.delete_row(tables::MESSAGES, id)
    }

    // ========================= Site Operations =========================

    /// Fetch the site-info singleton.
    pub fn get_site_info(&self) -> StoreApiResult<SiteInfo> {
        let path = format!("/rest/v1/{}?order=id.asc&limit=1", tables::SITE_INFO);
        let info = Self::parse_single_row(self.get(&path)?, "site info")?;
        self.metrics.record_records_fetched(1);
        Ok(info)
    }

    /// Update the site-info singleton.
    pub fn update_site_info(&self, id: i64, changes: &SiteInfoChanges) -> StoreApiResult<SiteInfo> {
        self.update_row(tables::SITE_INFO, id, changes)
    }

    /// List social links.
    pub fn get_social_links(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<SocialLink>> {
        self.list_rows(tables::SOCIAL_LINKS, limit, offset)
    }

    /// Create a new social link.
    pub fn create_social_link(&self, link: &NewSocialLink) -> StoreApiResult<SocialLink> {
        self.insert_row(tables::SOCIAL_LINKS, link)
    }

    /// Delete a social link.
    pub fn delete_social_link(&self, id: i64) -> StoreApiResult<()> {
        self.delete_row(tables::SOCIAL_LINKS, id)
    }

    // ========================= Document Operations =========================

    /// List document metadata rows.
    pub fn get_documents(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<DocumentFile>> {
        self.list_rows(tables::DOCUMENTS, limit, offset)
    }

    /// Insert a document metadata row.
    pub fn create_document(&self, document: &NewDocumentFile) -> StoreApiResult<DocumentFile> {
        self.insert_row(tables::DOCUMENTS, document)
    }

    /// Get a single document metadata row by id.
    pub fn get_document(&self, id: i64) -> StoreApiResult<DocumentFile> {
        self.get_row(tables::DOCUMENTS, id)
    }

    /// Delete a document metadata row.
    pub fn delete_document(&self, id: i64) -> StoreApiResult<()> {
        self.delete_row(tables::DOCUMENTS, id)
    }

    /// Upload a file to the documents bucket.
    pub fn upload_object(
        &self,
        object_path: &str,
        bytes: &[u8],
        content_type: &str,
    ) -> StoreApiResult<()> {
        let start = Instant::now();
        let url = self.build_url(&format!(
            "/storage/v1/object/{}/{}",
            self.storage_bucket,
            urlencoding::encode(object_path)
        ));

        tracing::info!("Uploading {} bytes to {}", bytes.len(), object_path);

        let result = self
            .authed(self.agent.post(&url))
            .set("Content-Type", content_type)
            .send_bytes(bytes)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        } else {
            self.metrics.record_object_uploaded();
        }
        self.metrics.record_http_request(duration);

        result.map(|_| ())
    }

    /// Delete a file from the documents bucket.
    pub fn delete_object(&self, object_path: &str) -> StoreApiResult<()> {
        let path = format!(
            "/storage/v1/object/{}/{}",
            self.storage_bucket,
            urlencoding::encode(object_path)
        );
        self.delete(&path)?;
        Ok(())
    }

    /// Public download URL for an object in the documents bucket.
    pub fn object_public_url(&self, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.storage_bucket,
            urlencoding::encode(object_path)
        )
    }
}
