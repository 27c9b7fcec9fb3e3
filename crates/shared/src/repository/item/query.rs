use crate::{
    abstract_trait::{DynDocumentStore, ItemQueryRepositoryTrait},
    errors::RepositoryError,
    model::Item as ItemModel,
};
use async_trait::async_trait;
use serde_dynamo::{from_item, from_items};
use tracing::{error, info};

pub struct ItemQueryRepository {
    store: DynDocumentStore,
    table: String,
}

impl ItemQueryRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl ItemQueryRepositoryTrait for ItemQueryRepository {
    async fn find_all(&self) -> Result<Vec<ItemModel>, RepositoryError> {
        let documents = self.store.scan(&self.table).await.map_err(|e| {
            error!("❌ Failed to scan items: {e}");
            e
        })?;

        let items: Vec<ItemModel> = from_items(documents)?;

        info!("✅ Found {} items", items.len());
        Ok(items)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ItemModel>, RepositoryError> {
        let document = self.store.get(&self.table, id).await.map_err(|e| {
            error!("❌ Failed to fetch item {id}: {e}");
            e
        })?;

        match document {
            Some(document) => Ok(Some(from_item(document)?)),
            None => Ok(None),
        }
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<ItemModel>, RepositoryError> {
        info!("🔍 Searching items by name: {term:?}");

        let needle = term.to_lowercase();

        let items = self
            .find_all()
            .await?
            .into_iter()
            .filter(|item| item.item_name.to_lowercase().contains(&needle))
            .collect();

        Ok(items)
    }
}
