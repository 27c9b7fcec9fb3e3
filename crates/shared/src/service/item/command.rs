use crate::{
    abstract_trait::{DynItemCommandRepository, DynItemQueryRepository, ItemCommandServiceTrait},
    domain::{
        requests::{CreateItemRequest, UpdateItemRequest},
        responses::{ApiResponse, ItemResponse},
    },
    errors::ServiceError,
    model::{Item as ItemModel, ItemPatch},
    service::item::ImageLinks,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};
use uuid::Uuid;
use validator::Validate;

pub struct ItemCommandService {
    query: DynItemQueryRepository,
    command: DynItemCommandRepository,
    links: ImageLinks,
    tracer: OperationTracer,
}

pub struct ItemCommandServiceDeps {
    pub query: DynItemQueryRepository,
    pub command: DynItemCommandRepository,
    pub links: ImageLinks,
    pub registry: Arc<Mutex<Registry>>,
}

impl ItemCommandService {
    pub async fn new(deps: ItemCommandServiceDeps) -> Self {
        let ItemCommandServiceDeps {
            query,
            command,
            links,
            registry,
        } = deps;

        Self {
            query,
            command,
            links,
            tracer: OperationTracer::new("item-command-service", registry).await,
        }
    }

    async fn existing(&self, id: &str) -> Result<ItemModel, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Item not found".to_string()))
    }
}

#[async_trait]
impl ItemCommandServiceTrait for ItemCommandService {
    async fn create_item(
        &self,
        mut req: CreateItemRequest,
    ) -> Result<ApiResponse<ItemResponse>, ServiceError> {
        info!("🆕 Creating item: {}", req.item_name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "CreateItem",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("item.name", req.item_name.clone()),
            ],
        );

        let Some(image) = req.image.take() else {
            self.tracer
                .complete_error(&tracing_ctx, method, "No file uploaded");
            return Err(ServiceError::validation("No file uploaded."));
        };

        if let Err(errors) = req.validate() {
            self.tracer
                .complete_error(&tracing_ctx, method, "Validation failed");
            return Err(ServiceError::from(errors));
        }

        let key = match self
            .links
            .object_store
            .upload(image.bytes, &image.file_name, image.content_type.as_deref())
            .await
        {
            Ok(key) => key,
            Err(e) => {
                error!("❌ Failed to upload image {}: {e}", image.file_name);
                self.tracer
                    .complete_error(&tracing_ctx, method, "Image upload failed");
                return Err(ServiceError::Storage(e));
            }
        };

        let now = Utc::now();
        let item = ItemModel {
            id: Uuid::new_v4().to_string(),
            item_name: req.item_name,
            item_category: req.item_category,
            item_price: req.item_price,
            item_qty: req.item_qty,
            item_description: req.item_description,
            item_image: Some(key.clone()),
            is_s3_image: true,
            created_at: now,
            updated_at: now,
        };

        let item = match self.command.create_item(&item).await {
            Ok(item) => item,
            Err(e) => {
                error!("❌ Failed to store item, discarding uploaded image {key}: {e}");
                self.links.discard(&key).await;
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to create item");
                return Err(ServiceError::Repo(e));
            }
        };

        let data = self.links.response(item).await;

        self.tracer
            .complete_success(&tracing_ctx, method, "Item created");

        Ok(ApiResponse::success("Item created successfully", data))
    }

    async fn update_item(
        &self,
        id: &str,
        req: UpdateItemRequest,
    ) -> Result<ApiResponse<ItemResponse>, ServiceError> {
        info!("✏️ Updating item: {id}");

        let method = Method::Patch;
        let tracing_ctx = self.tracer.start(
            "UpdateItem",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("item.id", id.to_string()),
            ],
        );

        if let Err(errors) = req.validate() {
            self.tracer
                .complete_error(&tracing_ctx, method, "Validation failed");
            return Err(ServiceError::from(errors));
        }

        let existing = match self.existing(id).await {
            Ok(item) => item,
            Err(e) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Item not found");
                return Err(e);
            }
        };

        let mut patch = ItemPatch {
            item_name: req.item_name,
            item_category: req.item_category,
            item_price: req.item_price,
            item_qty: req.item_qty,
            item_description: req.item_description,
            ..Default::default()
        };

        let new_key = match req.image {
            Some(image) => match self
                .links
                .object_store
                .upload(image.bytes, &image.file_name, image.content_type.as_deref())
                .await
            {
                Ok(key) => Some(key),
                Err(e) => {
                    error!("❌ Failed to upload replacement image: {e}");
                    self.tracer
                        .complete_error(&tracing_ctx, method, "Image upload failed");
                    return Err(ServiceError::Storage(e));
                }
            },
            None => None,
        };

        if let Some(key) = &new_key {
            patch.item_image = Some(key.clone());
            patch.is_s3_image = Some(true);
        }

        let updated = match self.command.update_item(id, &patch).await {
            Ok(item) => item,
            Err(e) => {
                error!("❌ Failed to update item {id}: {e}");
                if let Some(key) = &new_key {
                    self.links.discard(key).await;
                }
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to update item");
                return Err(ServiceError::Repo(e));
            }
        };

        if new_key.is_some()
            && let Some(old_key) = existing.stored_image_key()
            && Some(old_key) != new_key.as_deref()
        {
            self.links.discard(old_key).await;
        }

        let data = self.links.response(updated).await;

        self.tracer
            .complete_success(&tracing_ctx, method, "Item updated");

        Ok(ApiResponse::success("Item updated successfully", data))
    }

    async fn delete_item(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting item: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "DeleteItem",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("item.id", id.to_string()),
            ],
        );

        let existing = match self.existing(id).await {
            Ok(item) => item,
            Err(e) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Item not found");
                return Err(e);
            }
        };

        if let Some(key) = existing.stored_image_key() {
            self.links.discard(key).await;
        }

        if let Err(e) = self.command.delete_item(id).await {
            error!("❌ Failed to delete item {id}: {e}");
            self.tracer
                .complete_error(&tracing_ctx, method, "Failed to delete item");
            return Err(ServiceError::Repo(e));
        }

        self.tracer
            .complete_success(&tracing_ctx, method, "Item deleted");

        Ok(ApiResponse::success("Item deleted successfully", ()))
    }

    async fn delete_image(&self, key: &str) -> Result<ApiResponse<()>, ServiceError> {
        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "DeleteImage",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("image.key", key.to_string()),
            ],
        );

        if let Err(e) = self.links.object_store.delete(key).await {
            error!("❌ Failed to delete image {key}: {e}");
            self.tracer
                .complete_error(&tracing_ctx, method, "Failed to delete image");
            return Err(ServiceError::Storage(e));
        }

        self.tracer
            .complete_success(&tracing_ctx, method, "Image deleted");

        Ok(ApiResponse::success("Image deleted successfully", ()))
    }
}
