use crate::{
    abstract_trait::StoredObject,
    domain::responses::{ApiResponse, ItemResponse},
    errors::{RepositoryError, ServiceError},
    model::Item as ItemModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynItemQueryRepository = Arc<dyn ItemQueryRepositoryTrait + Send + Sync>;
pub type DynItemQueryService = Arc<dyn ItemQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ItemQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ItemModel>, RepositoryError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<ItemModel>, RepositoryError>;
    /// Case-insensitive substring match on the item name.
    async fn search_by_name(&self, term: &str) -> Result<Vec<ItemModel>, RepositoryError>;
}

#[async_trait]
pub trait ItemQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ItemResponse>>, ServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<ItemResponse>, ServiceError>;
    async fn search_by_name(
        &self,
        term: &str,
    ) -> Result<ApiResponse<Vec<ItemResponse>>, ServiceError>;
    async fn fetch_image(&self, key: &str) -> Result<StoredObject, ServiceError>;
}
