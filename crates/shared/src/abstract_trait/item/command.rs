use crate::{
    domain::{
        requests::{CreateItemRequest, UpdateItemRequest},
        responses::{ApiResponse, ItemResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Item as ItemModel, ItemPatch},
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynItemCommandRepository = Arc<dyn ItemCommandRepositoryTrait + Send + Sync>;
pub type DynItemCommandService = Arc<dyn ItemCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ItemCommandRepositoryTrait {
    async fn create_item(&self, item: &ItemModel) -> Result<ItemModel, RepositoryError>;
    async fn update_item(&self, id: &str, patch: &ItemPatch)
    -> Result<ItemModel, RepositoryError>;
    async fn delete_item(&self, id: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ItemCommandServiceTrait {
    async fn create_item(
        &self,
        req: CreateItemRequest,
    ) -> Result<ApiResponse<ItemResponse>, ServiceError>;
    async fn update_item(
        &self,
        id: &str,
        req: UpdateItemRequest,
    ) -> Result<ApiResponse<ItemResponse>, ServiceError>;
    async fn delete_item(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;
    async fn delete_image(&self, key: &str) -> Result<ApiResponse<()>, ServiceError>;
}
