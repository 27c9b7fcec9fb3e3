use crate::errors::RepositoryError;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::{collections::HashMap, sync::Arc};

/// One DynamoDB item, keyed by attribute name.
pub type Document = HashMap<String, AttributeValue>;

pub type DynDocumentStore = Arc<dyn DocumentStoreTrait + Send + Sync>;

/// Key-value document table access. Every table is keyed by a string `id`.
#[async_trait]
pub trait DocumentStoreTrait {
    /// Writes the whole document, replacing any existing one with the same id.
    async fn put(&self, table: &str, document: Document) -> Result<(), RepositoryError>;
    async fn get(&self, table: &str, id: &str) -> Result<Option<Document>, RepositoryError>;
    async fn scan(&self, table: &str) -> Result<Vec<Document>, RepositoryError>;
    /// Full scan filtered on `attribute = value`.
    async fn scan_eq(
        &self,
        table: &str,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<Vec<Document>, RepositoryError>;
    /// Sets each attribute of `patch` on the document and returns it with all new values.
    async fn update(
        &self,
        table: &str,
        id: &str,
        patch: Document,
    ) -> Result<Document, RepositoryError>;
    async fn delete(&self, table: &str, id: &str) -> Result<(), RepositoryError>;
}
