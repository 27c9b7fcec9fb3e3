use crate::{
    abstract_trait::{ObjectStoreTrait, StoredObject},
    blob::object_key,
    errors::ObjectStoreError,
};
use async_trait::async_trait;
use aws_sdk_s3::{Client, presigning::PresigningConfig, primitives::ByteStream};
use std::time::Duration;
use tracing::debug;

pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStoreTrait for S3ObjectStore {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: Option<&str>,
    ) -> Result<String, ObjectStoreError> {
        let key = object_key(file_name);
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .set_content_type(content_type.map(str::to_string))
            .send()
            .await
            .map_err(|e| ObjectStoreError::Upload(format!("S3 upload failed: {e}")))?;

        debug!(key = %key, size, bucket = %self.bucket, "Stored object in S3");

        Ok(key)
    }

    async fn presigned_url(
        &self,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ObjectStoreError> {
        let config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| ObjectStoreError::Presign(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(|e| ObjectStoreError::Presign(format!("S3 presign failed: {e}")))?;

        Ok(request.uri().to_string())
    }

    async fn delete(&self, key: &str) -> Result<(), ObjectStoreError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ObjectStoreError::Delete(format!("S3 delete failed: {e}")))?;

        debug!(key = %key, bucket = %self.bucket, "Deleted object from S3");

        Ok(())
    }

    async fn fetch(&self, key: &str) -> Result<StoredObject, ObjectStoreError> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let err_str = e.to_string();
                if err_str.contains("NoSuchKey") || err_str.contains("404") {
                    ObjectStoreError::NotFound(key.to_string())
                } else {
                    ObjectStoreError::Download(format!("S3 download failed: {e}"))
                }
            })?;

        let content_type = response.content_type.clone();
        let bytes = response
            .body
            .collect()
            .await
            .map_err(|e| ObjectStoreError::Download(format!("S3 body read failed: {e}")))?
            .into_bytes()
            .to_vec();

        Ok(StoredObject {
            bytes,
            content_type,
        })
    }
}
