use crate::{
    abstract_trait::{Document, DynDocumentStore, ItemCommandRepositoryTrait},
    errors::RepositoryError,
    model::{Item as ItemModel, ItemPatch},
};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;
use serde_dynamo::{from_item, to_item};
use tracing::{error, info};

pub struct ItemCommandRepository {
    store: DynDocumentStore,
    table: String,
}

impl ItemCommandRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl ItemCommandRepositoryTrait for ItemCommandRepository {
    async fn create_item(&self, item: &ItemModel) -> Result<ItemModel, RepositoryError> {
        let document: Document = to_item(item)?;

        self.store.put(&self.table, document).await.map_err(|e| {
            error!("❌ Failed to create item {}: {e}", item.item_name);
            e
        })?;

        info!("✅ Created item ID {} ({})", item.id, item.item_name);
        Ok(item.clone())
    }

    async fn update_item(
        &self,
        id: &str,
        patch: &ItemPatch,
    ) -> Result<ItemModel, RepositoryError> {
        let mut document: Document = to_item(patch)?;
        document.insert(
            "updatedAt".to_string(),
            AttributeValue::S(Utc::now().to_rfc3339()),
        );

        let updated = self
            .store
            .update(&self.table, id, document)
            .await
            .map_err(|e| {
                error!("❌ Failed to update item {id}: {e}");
                e
            })?;

        info!("✅ Updated item ID {id}");
        Ok(from_item(updated)?)
    }

    async fn delete_item(&self, id: &str) -> Result<(), RepositoryError> {
        self.store.delete(&self.table, id).await.map_err(|e| {
            error!("❌ Failed to delete item {id}: {e}");
            e
        })?;

        info!("🗑️ Deleted item ID {id}");
        Ok(())
    }
}
