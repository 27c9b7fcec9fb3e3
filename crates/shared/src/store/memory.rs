use crate::{
    abstract_trait::{Document, DocumentStoreTrait},
    errors::RepositoryError,
    store::ID_ATTRIBUTE,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

/// Process-local tables with DynamoDB item semantics: put overwrites, update
/// upserts, delete of a missing id is a no-op.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    tables: RwLock<HashMap<String, BTreeMap<String, Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn document_id(document: &Document) -> Result<String, RepositoryError> {
        match document.get(ID_ATTRIBUTE) {
            Some(AttributeValue::S(id)) => Ok(id.clone()),
            _ => Err(RepositoryError::Custom(
                "document is missing its string id".to_string(),
            )),
        }
    }
}

#[async_trait]
impl DocumentStoreTrait for InMemoryDocumentStore {
    async fn put(&self, table: &str, document: Document) -> Result<(), RepositoryError> {
        let id = Self::document_id(&document)?;
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .insert(id, document);
        Ok(())
    }

    async fn get(&self, table: &str, id: &str) -> Result<Option<Document>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .get(table)
            .and_then(|rows| rows.get(id))
            .cloned())
    }

    async fn scan(&self, table: &str) -> Result<Vec<Document>, RepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .get(table)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn scan_eq(
        &self,
        table: &str,
        attribute: &str,
        value: AttributeValue,
    ) -> Result<Vec<Document>, RepositoryError> {
        Ok(self
            .scan(table)
            .await?
            .into_iter()
            .filter(|doc| doc.get(attribute) == Some(&value))
            .collect())
    }

    async fn update(
        &self,
        table: &str,
        id: &str,
        patch: Document,
    ) -> Result<Document, RepositoryError> {
        let mut tables = self.tables.write().await;
        let document = tables
            .entry(table.to_string())
            .or_default()
            .entry(id.to_string())
            .or_insert_with(|| {
                HashMap::from([(ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))])
            });

        document.extend(patch);

        Ok(document.clone())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), RepositoryError> {
        if let Some(rows) = self.tables.write().await.get_mut(table) {
            rows.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, name: &str) -> Document {
        HashMap::from([
            ("id".to_string(), AttributeValue::S(id.to_string())),
            ("email".to_string(), AttributeValue::S(name.to_string())),
        ])
    }

    #[tokio::test]
    async fn put_then_get_returns_the_document() {
        let store = InMemoryDocumentStore::new();
        store.put("Users", doc("u1", "a@b.c")).await.unwrap();

        let found = store.get("Users", "u1").await.unwrap().unwrap();
        assert_eq!(found["email"], AttributeValue::S("a@b.c".into()));
        assert!(store.get("Users", "missing").await.unwrap().is_none());
        assert!(store.get("Items", "u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_without_id_is_rejected() {
        let store = InMemoryDocumentStore::new();
        let result = store.put("Users", Document::new()).await;
        assert!(matches!(result, Err(RepositoryError::Custom(_))));
    }

    #[tokio::test]
    async fn scan_eq_filters_on_attribute() {
        let store = InMemoryDocumentStore::new();
        store.put("Users", doc("u1", "a@b.c")).await.unwrap();
        store.put("Users", doc("u2", "x@y.z")).await.unwrap();

        let hits = store
            .scan_eq("Users", "email", AttributeValue::S("x@y.z".into()))
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], AttributeValue::S("u2".into()));
        assert_eq!(store.scan("Users").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_merges_and_returns_all_new_values() {
        let store = InMemoryDocumentStore::new();
        store.put("Users", doc("u1", "a@b.c")).await.unwrap();

        let patch = HashMap::from([("email".to_string(), AttributeValue::S("new@b.c".into()))]);
        let updated = store.update("Users", "u1", patch).await.unwrap();

        assert_eq!(updated["email"], AttributeValue::S("new@b.c".into()));
        assert_eq!(updated["id"], AttributeValue::S("u1".into()));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryDocumentStore::new();
        store.put("Users", doc("u1", "a@b.c")).await.unwrap();

        store.delete("Users", "u1").await.unwrap();
        store.delete("Users", "u1").await.unwrap();

        assert!(store.scan("Users").await.unwrap().is_empty());
    }
}
