use async_trait::async_trait;
use meddoc_directory::error::{StoreApiError, StoreApiResult};
use meddoc_directory::models::{DocumentFile, NewDocumentFile};
use meddoc_directory::repositories::DocumentRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock documents repository: metadata rows plus an in-memory "bucket".
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDocumentRepository {
    documents: Arc<Mutex<HashMap<i64, DocumentFile>>>,
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    next_id: Arc<Mutex<i64>>,
}

#[allow(dead_code)]
impl MockDocumentRepository {
    /// Create a new empty MockDocumentRepository.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(Mutex::new(HashMap::new())),
            objects: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Check whether an object exists in the mock bucket.
    pub fn has_object(&self, object_path: &str) -> bool {
        self.objects.lock().unwrap().contains_key(object_path)
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentRepository for MockDocumentRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<DocumentFile>> {
        let documents = self.documents.lock().unwrap();
        let mut all: Vec<DocumentFile> = documents.values().cloned().collect();
        all.sort_by_key(|d| d.id);
        Ok(all.into_iter().skip(offset).take(limit).collect())
    }

    async fn get(&self, id: i64) -> StoreApiResult<DocumentFile> {
        let documents = self.documents.lock().unwrap();
        documents
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreApiError::NotFound(format!("Document {} not found", id)))
    }

    async fn create(&self, document: &NewDocumentFile) -> StoreApiResult<DocumentFile> {
        let mut documents = self.documents.lock().unwrap();
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        let created = DocumentFile {
            id,
            title: document.title.clone(),
            file_name: document.file_name.clone(),
            url: document.url.clone(),
            mime_type: document.mime_type.clone(),
            size_bytes: document.size_bytes,
            uploaded_at: Some(chrono::Utc::now().to_rfc3339()),
        };
        documents.insert(id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        let mut documents = self.documents.lock().unwrap();
        if documents.remove(&id).is_none() {
            return Err(StoreApiError::NotFound(format!("Document {} not found", id)));
        }
        Ok(())
    }

    async fn upload_object(
        &self,
        object_path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> StoreApiResult<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(object_path.to_string(), bytes);
        Ok(())
    }

    async fn delete_object(&self, object_path: &str) -> StoreApiResult<()> {
        let mut objects = self.objects.lock().unwrap();
        if objects.remove(object_path).is_none() {
            return Err(StoreApiError::NotFound(format!(
                "Object {} not found",
                object_path
            )));
        }
        Ok(())
    }

    fn public_url(&self, object_path: &str) -> String {
        format!("https://mock.storage/documents/{}", object_path)
    }
}
