use crate::{
    abstract_trait::{DynDocumentStore, UserQueryRepositoryTrait},
    errors::RepositoryError,
    model::User as UserModel,
};
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_dynamo::from_item;
use tracing::{error, info};

pub struct UserQueryRepository {
    store: DynDocumentStore,
    table: String,
}

impl UserQueryRepository {
    pub fn new(store: DynDocumentStore, table: &str) -> Self {
        Self {
            store,
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        info!("🔍 Looking up user by email: {email}");

        let documents = self
            .store
            .scan_eq(&self.table, "email", AttributeValue::S(email.to_string()))
            .await
            .map_err(|e| {
                error!("❌ Failed to scan users for {email}: {e}");
                e
            })?;

        match documents.into_iter().next() {
            Some(document) => Ok(Some(from_item(document)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserModel>, RepositoryError> {
        let document = self.store.get(&self.table, id).await.map_err(|e| {
            error!("❌ Failed to fetch user {id}: {e}");
            e
        })?;

        match document {
            Some(document) => Ok(Some(from_item(document)?)),
            None => Ok(None),
        }
    }
}
