use crate::{middleware::jwt::auth_middleware, state::AppState};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynInvoiceService,
    domain::responses::InvoiceResponse,
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/generate-invoice",
    tag = "Invoice",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Invoice written under /docs", body = InvoiceResponse),
        (status = 500, description = "Rendering or disk failure", body = ErrorResponse)
    )
)]
pub async fn generate_invoice(
    Extension(service): Extension<DynInvoiceService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.generate_invoice().await?;
    Ok((StatusCode::OK, Json(response.data)))
}

pub fn invoice_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/generate-invoice", get(generate_invoice))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.invoice_service.clone()))
        .layer(Extension(app_state.di_container.auth_service.identity.clone()))
        .with_state(app_state)
}
