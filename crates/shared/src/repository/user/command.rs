use crate::{
    abstract_trait::{Document, DynDocumentStore, UserCommandRepositoryTrait},
    errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use serde_dynamo::to_item;
use tracing::{error, info};

pub struct UserCommandRepository {
    store: DynDocumentStore,
    table: String,
}

impl UserCommandRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, user: &UserModel) -> Result<UserModel, RepositoryError> {
        let document: Document = to_item(user)?;

        self.store.put(&self.table, document).await.map_err(|e| {
            error!("❌ Failed to create user {}: {e}", user.email);
            e
        })?;

        info!("✅ Created user ID {}", user.id);
        Ok(user.clone())
    }
}
