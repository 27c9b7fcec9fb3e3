use crate::{
    abstract_trait::{DynOrderQueryRepository, PaymentServiceTrait},
    domain::{
        requests::PaymentQuoteQuery,
        responses::{ApiResponse, PaymentQuoteResponse},
    },
    errors::ServiceError,
    utils::{Method, OperationTracer},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub struct PaymentService {
    order_query: DynOrderQueryRepository,
    tracer: OperationTracer,
}

pub struct PaymentServiceDeps {
    pub order_query: DynOrderQueryRepository,
    pub registry: Arc<Mutex<Registry>>,
}

impl PaymentService {
    pub async fn new(deps: PaymentServiceDeps) -> Self {
        Self {
            order_query: deps.order_query,
            tracer: OperationTracer::new("payment-service", deps.registry).await,
        }
    }
}

#[async_trait]
impl PaymentServiceTrait for PaymentService {
    async fn quote(
        &self,
        order_id: &str,
        query: &PaymentQuoteQuery,
    ) -> Result<ApiResponse<PaymentQuoteResponse>, ServiceError> {
        let method = Method::Get;
        let tracing_ctx = self.tracer.start(
            "QuotePayment",
            vec![
                KeyValue::new("component", "payment"),
                KeyValue::new("order.id", order_id.to_string()),
            ],
        );

        let order = match self.order_query.find_by_id(order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Order not found");
                return Err(ServiceError::NotFound("Order not found".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to load order {order_id}: {e}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to load order");
                return Err(ServiceError::Repo(e));
            }
        };

        let discount_rate = query.promotion.map(|p| p.rate()).unwrap_or(0.0);
        let discount = round_cents(order.total_price * discount_rate);
        let payable = round_cents(order.total_price - discount);

        let change = match query.tendered {
            Some(tendered) if !tendered.is_finite() || tendered < payable => {
                self.tracer
                    .complete_error(&tracing_ctx, method, "Insufficient amount tendered");
                return Err(ServiceError::validation(format!(
                    "Tendered amount must cover the payable amount of {payable:.2}"
                )));
            }
            Some(tendered) => Some(round_cents(tendered - payable)),
            None => None,
        };

        if let Some(promotion) = query.promotion {
            info!(
                "🏷️ Applied {} to order {order_id}: -{discount:.2}",
                promotion.label()
            );
        }

        self.tracer
            .complete_success(&tracing_ctx, method, "Payment quoted");

        Ok(ApiResponse::success(
            "Payment quote calculated",
            PaymentQuoteResponse {
                order_id: order.id,
                total_price: order.total_price,
                promotion: query.promotion,
                discount_rate,
                discount,
                payable,
                tendered: query.tendered,
                change,
            },
        ))
    }
}
