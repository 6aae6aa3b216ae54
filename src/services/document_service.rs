//! Documents-library service layer.
//!
//! Uploads push the bytes to object storage, then record a metadata row
//! pointing at the public URL. Deletion removes both.

use crate::error::{StoreApiError, StoreApiResult};
use crate::models::{DocumentFile, NewDocumentFile};
use crate::repositories::DocumentRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Parameters for uploading a document.
#[derive(Debug, Clone)]
pub struct UploadDocumentParams {
    pub title: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

/// Document service trait for business operations.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// List documents with pagination.
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<DocumentFile>>;

    /// Upload a file and record its metadata row.
    async fn upload(&self, params: UploadDocumentParams) -> StoreApiResult<DocumentFile>;

    /// Delete a document: the stored object first, then the metadata row.
    async fn delete(&self, id: i64) -> StoreApiResult<()>;
}

/// Default implementation of DocumentService.
pub struct DocumentServiceImpl {
    repository: Arc<dyn DocumentRepository>,
}

impl DocumentServiceImpl {
    /// Create a new document service.
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    /// Derive a collision-free object key from the original file name.
    ///
    /// Spaces become hyphens; a UTC timestamp prefix keeps re-uploads of the
    /// same file name distinct.
    fn object_key(file_name: &str) -> String {
        let safe: String = file_name
            .chars()
            .map(|c| if c.is_whitespace() { '-' } else { c })
            .collect();
        format!("{}-{}", chrono::Utc::now().format("%Y%m%d%H%M%S"), safe)
    }
}

#[async_trait]
impl DocumentService for DocumentServiceImpl {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<DocumentFile>> {
        self.repository.list(limit, offset).await
    }

    async fn upload(&self, params: UploadDocumentParams) -> StoreApiResult<DocumentFile> {
        if params.title.trim().is_empty() || params.file_name.trim().is_empty() {
            return Err(StoreApiError::InvalidRequest(
                "title and file_name are required".to_string(),
            ));
        }
        if params.bytes.is_empty() {
            return Err(StoreApiError::InvalidRequest(
                "file is empty".to_string(),
            ));
        }

        let key = Self::object_key(&params.file_name);
        let content_type = params
            .mime_type
            .clone()
            .unwrap_or_else(|| "application/octet-stream".to_string());
        let size = params.bytes.len() as u64;

        tracing::info!("Uploading document '{}' as {}", params.title, key);
        self.repository
            .upload_object(&key, params.bytes, &content_type)
            .await?;

        let row = NewDocumentFile {
            title: params.title,
            file_name: key.clone(),
            url: self.repository.public_url(&key),
            mime_type: params.mime_type,
            size_bytes: Some(size),
        };

        self.repository.create(&row).await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        let document = self.repository.get(id).await?;

        tracing::info!("Deleting document {} ({})", id, document.file_name);
        self.repository.delete_object(&document.file_name).await?;
        self.repository.delete(id).await
    }
}
