use crate::{
    abstract_trait::{DynOrderQueryRepository, OrderQueryServiceTrait},
    domain::responses::{ApiResponse, OrderResponse},
    errors::ServiceError,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    tracer: OperationTracer,
}

pub struct OrderQueryServiceDeps {
    pub query: DynOrderQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderQueryService {
    pub async fn new(deps: OrderQueryServiceDeps) -> Self {
        Self {
            query: deps.query,
            tracer: OperationTracer::new("order-query-service", deps.registry).await,
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self
            .tracer
            .start("FindAllOrders", vec![KeyValue::new("component", "order")]);

        match self.query.find_all().await {
            Ok(orders) => {
                let data: Vec<OrderResponse> =
                    orders.into_iter().map(OrderResponse::from).collect();
                self.tracer
                    .complete_success(&tracing_ctx, method, "Orders fetched");
                Ok(ApiResponse::success("Orders fetched successfully", data))
            }
            Err(e) => {
                error!("❌ Failed to fetch orders: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to fetch orders");
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "FindOrderById",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("order.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(order)) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Order fetched");
                Ok(ApiResponse::success(
                    "Order fetched successfully",
                    OrderResponse::from(order),
                ))
            }
            Ok(None) => {
                info!("🔍 Order not found: {id}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Order not found");
                Err(ServiceError::NotFound("Order not found".to_string()))
            }
            Err(e) => {
                error!("❌ Failed to fetch order {id}: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to fetch order");
                Err(ServiceError::Repo(e))
            }
        }
    }
}
