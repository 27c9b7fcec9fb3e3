use crate::{
    abstract_trait::{ObjectStoreTrait, StoredObject},
    blob::object_key,
    errors::ObjectStoreError,
};
use async_trait::async_trait;
use std::{collections::HashMap, time::Duration};
use tokio::sync::RwLock;
use tracing::debug;

/// Keys are prefixed with `simulated-`; read URLs point back at this server's
/// `/uploads/{key}` route and never expire.
pub struct InMemoryObjectStore {
    server_address: String,
    objects: RwLock<HashMap<String, StoredObject>>,
}

impl InMemoryObjectStore {
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            server_address: server_address.into().trim_end_matches('/').to_string(),
            objects: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ObjectStoreTrait for InMemoryObjectStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: Option<&str>,
    ) -> Result<String, ObjectStoreError> {
        let key = format!("simulated-{}", object_key(file_name));
        debug!(key = %key, size = bytes.len(), "Stored simulated object");

        self.objects.write().await.insert(
            key.clone(),
            StoredObject {
                bytes,
                content_type: content_type.map(str::to_string),
            },
        );

        Ok(key)
    }

    async fn presigned_url(
        &self,
        key: &str,
        _expires_in: Duration,
    ) -> Result<String, ObjectStoreError> {
        Ok(format!("{}/uploads/{key}", self.server_address))
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError> {
        self.objects.write().await.remove(key);
        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<StoredObject, ObjectStoreError> {
        self.objects
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| ObjectStoreError::NotFound(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_fetch_and_delete() {
        let store = InMemoryObjectStore::new("http://localhost:8070/");

        let key = store
            .upload(b"png".to_vec(), "mocha.png", Some("image/png"))
            .await
            .unwrap();
        assert!(key.starts_with("simulated-"));
        assert!(key.ends_with("-mocha.png"));

        let object = store.fetch(&key).await.unwrap();
        assert_eq!(object.bytes, b"png");
        assert_eq!(object.content_type.as_deref(), Some("image/png"));

        let url = store
            .presigned_url(&key, Duration::from_secs(60))
            .await
            .unwrap();
        assert_eq!(url, format!("http://localhost:8070/uploads/{key}"));

        store.delete(&key).await.unwrap();
        assert!(matches!(
            store.fetch(&key).await,
            Err(ObjectStoreError::NotFound(_))
        ));
    }
}
