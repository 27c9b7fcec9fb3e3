use crate::{
    abstract_trait::{DynItemQueryRepository, ItemQueryServiceTrait, StoredObject},
    domain::responses::{ApiResponse, ItemResponse},
    errors::ServiceError,
    service::item::ImageLinks,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct ItemQueryService {
    query: DynItemQueryRepository,
    links: ImageLinks,
    tracer: OperationTracer,
}

pub struct ItemQueryServiceDeps {
    pub query: DynItemQueryRepository,
    pub links: ImageLinks,
    pub registry: Arc<Mutex<Registry>>,
}

impl ItemQueryService {
    pub async fn new(deps: ItemQueryServiceDeps) -> Self {
        let ItemQueryServiceDeps {
            query,
            links,
            registry,
        } = deps;

        Self {
            query,
            links,
            tracer: OperationTracer::new("item-query-service", registry).await,
        }
    }
}

#[async_trait]
impl ItemQueryServiceTrait for ItemQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ItemResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self
            .tracer
            .start("FindAllItems", vec![KeyValue::new("component", "item")]);

        let items = match self.query.find_all().await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to fetch items: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to fetch items");
                return Err(ServiceError::Repo(e));
            }
        };

        let data = self.links.responses(items).await;

        self.tracer
            .complete_success(&tracing_ctx, method, "Items fetched");

        Ok(ApiResponse::success("Items fetched successfully", data))
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<ItemResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "FindItemById",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("item.id", id.to_string()),
            ],
        );

        let item = match self.query.find_by_id(id).await {
            Ok(Some(item)) => item,
            Ok(None) => {
                info!("🔍 Item not found: {id}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Item not found");
                return Err(ServiceError::NotFound("Item not found".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to fetch item {id}: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to fetch item");
                return Err(ServiceError::Repo(e));
            }
        };

        let data = self.links.response(item).await;

        self.tracer
            .complete_success(&tracing_ctx, method, "Item fetched");

        Ok(ApiResponse::success("Item fetched successfully", data))
    }

    async fn search_by_name(
        &self,
        term: &str,
    ) -> Result<ApiResponse<Vec<ItemResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "SearchItems",
            vec![
                KeyValue::new("component", "item"),
                KeyValue::new("item.search", term.to_string()),
            ],
        );

        let items = match self.query.search_by_name(term).await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to search items for {term:?}: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to search items");
                return Err(ServiceError::Repo(e));
            }
        };

        let data = self.links.responses(items).await;

        self.tracer.complete_success(
            &tracing_ctx,
            method,
            &format!("Found {} matching items", data.len()),
        );

        Ok(ApiResponse::success("Items fetched successfully", data))
    }

    async fn fetch_image(&self, key: &str) -> Result<StoredObject, ServiceError> {
        self.links.object_store.fetch(key).await.map_err(|e| {
            error!("❌ Failed to fetch image {key}: {e}");
            ServiceError::Storage(e)
        })
    }
}
