use crate::{
    abstract_trait::{
        DynItemQueryRepository, DynOrderCommandRepository, DynOrderQueryRepository,
        OrderCommandServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, OrderPatch},
        responses::{ApiResponse, OrderResponse},
    },
    errors::ServiceError,
    model::Order as OrderModel,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use chrono::Utc;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

const IMMUTABLE_ATTRIBUTES: [&str; 2] = ["id", "createdAt"];

pub struct OrderCommandService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    item_query: DynItemQueryRepository,
    tracer: OperationTracer,
}

pub struct OrderCommandServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub item_query: DynItemQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderCommandService {
    pub async fn new(deps: OrderCommandServiceDeps) -> Self {
        let OrderCommandServiceDeps {
            query,
            command,
            item_query,
            registry,
        } = deps;

        Self {
            query,
            command,
            item_query,
            tracer: OperationTracer::new("order-command-service", registry).await,
        }
    }

    async fn existing(&self, id: &str) -> Result<OrderModel, ServiceError> {
        self.query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Order not found".to_string()))
    }
}

/// Applies the patch to a copy of the stored order and checks that every
/// typed attribute still deserializes. Unknown attributes pass through.
fn check_patch(existing: &OrderModel, patch: &OrderPatch) -> Result<(), ServiceError> {
    let mut merged = match serde_json::to_value(existing) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(ServiceError::Internal("Order is not an object".to_string())),
        Err(e) => return Err(ServiceError::Internal(e.to_string())),
    };
    merged.extend(patch.0.iter().map(|(k, v)| (k.clone(), v.clone())));

    serde_json::from_value::<OrderModel>(Value::Object(merged))
        .map(|_| ())
        .map_err(|e| ServiceError::validation(format!("Invalid order patch: {e}")))
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_order(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🛒 Creating order with {} item ids", req.item_ids.len());

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "CreateOrder",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.item_count", req.item_ids.len() as i64),
            ],
        );

        if let Err(errors) = req.validate() {
            self.tracer
                .complete_error(&tracing_ctx, method, "No items provided");
            return Err(ServiceError::from(errors));
        }

        let mut items = Vec::with_capacity(req.item_ids.len());
        for item_id in &req.item_ids {
            match self.item_query.find_by_id(item_id).await {
                Ok(Some(item)) => items.push(item),
                Ok(None) => warn!("⚠️ Skipping unknown item {item_id} in order"),
                Err(e) => {
                    error!("❌ Failed to look up item {item_id}: {e}");
                    self.tracer
                        .complete_error(&tracing_ctx, method, "Item lookup failed");
                    return Err(ServiceError::Repo(e));
                }
            }
        }

        let total_price = items.iter().map(|item| item.item_price).sum();

        let now = Utc::now();
        let order = OrderModel {
            id: Uuid::new_v4().to_string(),
            items,
            item_ids: req.item_ids.clone(),
            total_price,
            created_at: now,
            updated_at: now,
        };

        match self.command.create_order(&order).await {
            Ok(order) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Order created");
                Ok(ApiResponse::success(
                    "Order created successfully",
                    OrderResponse::from(order),
                ))
            }
            Err(e) => {
                error!("❌ Failed to create order: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to create order");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn update_order(
        &self,
        id: &str,
        patch: &OrderPatch,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✏️ Updating order: {id}");

        let method = Method::Patch;
        let tracing_ctx = self.tracer.start(
            "UpdateOrder",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        if let Some(attribute) = IMMUTABLE_ATTRIBUTES
            .iter()
            .find(|attribute| patch.0.contains_key(**attribute))
        {
            self.tracer
                .complete_error(&tracing_ctx, method, "Immutable attribute in patch");
            return Err(ServiceError::validation(format!(
                "Attribute '{attribute}' cannot be updated"
            )));
        }

        let existing = match self.existing(id).await {
            Ok(order) => order,
            Err(e) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Order not found");
                return Err(e);
            }
        };

        if let Err(e) = check_patch(&existing, patch) {
            warn!("⚠️ Rejected patch for order {id}: {e}");
            self.tracer
                .complete_error(&tracing_ctx, method, "Invalid order patch");
            return Err(e);
        }

        match self.command.update_order(id, patch).await {
            Ok(order) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Order updated");
                Ok(ApiResponse::success(
                    "Order updated successfully",
                    OrderResponse::from(order),
                ))
            }
            Err(e) => {
                error!("❌ Failed to update order {id}: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to update order");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn delete_order(&self, id: &str) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting order: {id}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "DeleteOrder",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        if let Err(e) = self.existing(id).await {
            self.tracer
                .complete_error(&tracing_ctx, method, "Order not found");
            return Err(e);
        }

        if let Err(e) = self.command.delete_order(id).await {
            error!("❌ Failed to delete order {id}: {e}");
            self.tracer
                .complete_error(&tracing_ctx, method, "Failed to delete order");
            return Err(ServiceError::Repo(e));
        }

        self.tracer
            .complete_success(&tracing_ctx, method, "Order deleted");

        Ok(ApiResponse::success("Order deleted successfully", ()))
    }
}
