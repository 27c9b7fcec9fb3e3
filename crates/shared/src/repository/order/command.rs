use crate::{
    abstract_trait::{Document, DynDocumentStore, OrderCommandRepositoryTrait},
    domain::requests::OrderPatch,
    errors::RepositoryError,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use chrono::Utc;
use serde_dynamo::{from_item, to_attribute_value, to_item};
use tracing::{error, info};

pub struct OrderCommandRepository {
    store: DynDocumentStore,
    table: String,
}

impl OrderCommandRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn create_order(&self, order: &OrderModel) -> Result<OrderModel, RepositoryError> {
        let document: Document = to_item(order)?;

        self.store.put(&self.table, document).await.map_err(|e| {
            error!("❌ Failed to create order: {e}");
            e
        })?;

        info!(
            "✅ Created order ID {} with {} items",
            order.id,
            order.items.len()
        );
        Ok(order.clone())
    }

    async fn update_order(
        &self,
        id: &str,
        patch: &OrderPatch,
    ) -> Result<OrderModel, RepositoryError> {
        let mut document = Document::with_capacity(patch.0.len() + 1);
        for (key, value) in &patch.0 {
            let value: AttributeValue = to_attribute_value(value)?;
            document.insert(key.clone(), value);
        }
        document.insert(
            "updatedAt".to_string(),
            AttributeValue::S(Utc::now().to_rfc3339()),
        );

        let updated = self
            .store
            .update(&self.table, id, document)
            .await
            .map_err(|e| {
                error!("❌ Failed to update order {id}: {e}");
                e
            })?;

        info!("✅ Updated order ID {id}");
        Ok(from_item(updated)?)
    }

    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError> {
        self.store.delete(&self.table, id).await.map_err(|e| {
            error!("❌ Failed to delete order {id}: {e}");
            e
        })?;

        info!("🗑️ Deleted order ID {id}");
        Ok(())
    }
}
