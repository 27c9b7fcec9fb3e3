use crate::{
    domain::{
        requests::{CreateOrderRequest, OrderPatch},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Order as OrderModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderCommandService = Arc<dyn OrderCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    async fn create_order(&self, order: &OrderModel) -> Result<OrderModel, RepositoryError>;
    async fn update_order(
        &self,
        id: &str,
        patch: &OrderPatch,
    ) -> Result<OrderModel, RepositoryError>;
    async fn delete_order(&self, id: &str) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_order(
        &self,
        id: &str,
        patch: &OrderPatch,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn delete_order(&self, id: &str) -> Result<ApiResponse<()>, ServiceError>;
}
