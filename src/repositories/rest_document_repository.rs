use crate::client::AsyncStoreClient;
use crate::error::StoreApiResult;
use crate::models::{DocumentFile, NewDocumentFile};
use crate::repositories::traits::DocumentRepository;
use async_trait::async_trait;

/// Documents-library repository backed by the hosted record store and its
/// object-storage API.
pub struct RestDocumentRepository {
    client: AsyncStoreClient,
}

impl RestDocumentRepository {
    /// Create a new RestDocumentRepository with the given client.
    pub fn new(client: AsyncStoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentRepository for RestDocumentRepository {
    async fn list(&self, limit: usize, offset: usize) -> StoreApiResult<Vec<DocumentFile>> {
        self.client.run(move |c| c.get_documents(limit, offset)).await
    }

    async fn get(&self, id: i64) -> StoreApiResult<DocumentFile> {
        self.client.run(move |c| c.get_document(id)).await
    }

    async fn create(&self, document: &NewDocumentFile) -> StoreApiResult<DocumentFile> {
        let document = document.clone();
        self.client.run(move |c| c.create_document(&document)).await
    }

    async fn delete(&self, id: i64) -> StoreApiResult<()> {
        self.client.run(move |c| c.delete_document(id)).await
    }

    async fn upload_object(
        &self,
        object_path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> StoreApiResult<()> {
        let object_path = object_path.to_string();
        let content_type = content_type.to_string();
        self.client
            .run(move |c| c.upload_object(&object_path, &bytes, &content_type))
            .await
    }

    async fn delete_object(&self, object_path: &str) -> StoreApiResult<()> {
        let object_path = object_path.to_string();
        self.client.run(move |c| c.delete_object(&object_path)).await
    }

    fn public_url(&self, object_path: &str) -> String {
        self.client.client().object_public_url(object_path)
    }
}
