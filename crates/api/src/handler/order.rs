use crate::{
    middleware::{
        jwt::auth_middleware,
        validate::{SimpleValidatedJson, json_rejection},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query, rejection::JsonRejection},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService, DynPaymentService},
    domain::{
        requests::{CreateOrderRequest, OrderPatch, PaymentQuoteQuery},
        responses::{ApiResponse, OrderResponse, PaymentQuoteResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/order/create",
    tag = "Order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderResponse>),
        (status = 400, description = "No items provided for the order", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/order/",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List of orders", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/order/{orderId}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("orderId" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/order/{orderId}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("orderId" = String, Path, description = "Order ID")),
    request_body = OrderPatch,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Protected attribute in patch", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(order_id): Path<String>,
    body: Result<Json<OrderPatch>, JsonRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let Json(patch) = body.map_err(json_rejection)?;
    let response = service.update_order(&order_id, &patch).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/order/{orderId}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("orderId" = String, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_order(&order_id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/order/{orderId}/payment",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("orderId" = String, Path, description = "Order ID"), PaymentQuoteQuery),
    responses(
        (status = 200, description = "Payment quote", body = ApiResponse<PaymentQuoteResponse>),
        (status = 400, description = "Tendered amount below payable", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    )
)]
pub async fn quote_payment(
    Extension(service): Extension<DynPaymentService>,
    Path(order_id): Path<String>,
    Query(query): Query<PaymentQuoteQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.quote(&order_id, &query).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let orders = &app_state.di_container.order_service;

    OpenApiRouter::new()
        .route("/order/create", post(create_order))
        .route("/order", get(get_orders))
        .route("/order/", get(get_orders))
        .route(
            "/order/{orderId}",
            get(get_order).patch(update_order).delete(delete_order),
        )
        .route("/order/{orderId}/payment", get(quote_payment))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(orders.query.clone()))
        .layer(Extension(orders.command.clone()))
        .layer(Extension(app_state.di_container.payment_service.clone()))
        .layer(Extension(app_state.di_container.auth_service.identity.clone()))
        .with_state(app_state)
}
