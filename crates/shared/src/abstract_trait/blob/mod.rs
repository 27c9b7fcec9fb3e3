use crate::errors::ObjectStoreError;
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

pub type DynObjectStore = Arc<dyn ObjectStoreTrait + Send + Sync>;

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

#[async_trait]
pub trait ObjectStoreTrait {
    /// Stores the bytes under a freshly generated key and returns that key.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: Option<&str>,
    ) -> Result<String, ObjectStoreError>;
    async fn presigned_url(&self, key: &str, expires_in: Duration)
    -> Result<String, ObjectStoreError>;
    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError>;
    async fn fetch(&self, key: &str) -> Result<StoredObject, ObjectStoreError>;
}
