use crate::{
    abstract_trait::{DynDocumentStore, OrderQueryRepositoryTrait},
    errors::RepositoryError,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use serde_dynamo::{from_item, from_items};
use tracing::{error, info};

pub struct OrderQueryRepository {
    store: DynDocumentStore,
    table: String,
}

impl OrderQueryRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        let documents = self.store.scan(&self.table).await.map_err(|e| {
            error!("❌ Failed to scan orders: {e}");
            e
        })?;

        let orders: Vec<OrderModel> = from_items(documents)?;

        info!("✅ Found {} orders", orders.len());
        Ok(orders)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<OrderModel>, RepositoryError> {
        let document = self.store.get(&self.table, id).await.map_err(|e| {
            error!("❌ Failed to fetch order {id}: {e}");
            e
        })?;

        match document {
            Some(document) => Ok(Some(from_item(document)?)),
            None => Ok(None),
        }
    }
}
