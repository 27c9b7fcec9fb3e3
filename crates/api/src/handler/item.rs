use crate::{
    middleware::{
        jwt::auth_middleware,
        multipart::{ItemForm, UploadLimit},
    },
    state::AppState,
};
use axum::{
    Json,
    body::Body,
    extract::{Extension, Path, Query},
    http::{StatusCode, header},
    middleware,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
};
use shared::{
    abstract_trait::{DynItemCommandService, DynItemQueryService},
    domain::{
        requests::SearchItemQuery,
        responses::{ApiResponse, ItemResponse},
    },
    errors::{ErrorResponse, HttpError},
};
use std::sync::Arc;
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{
        RefOr, Schema,
        schema::{KnownFormat, ObjectBuilder, SchemaFormat, Type},
    },
};
use utoipa_axum::router::OpenApiRouter;

/// Multipart layout of the item form, for the API docs. [`ItemForm`] does
/// the parsing.
pub struct ItemUpload;

impl PartialSchema for ItemUpload {
    fn schema() -> RefOr<Schema> {
        let field = |ty: Type, format: Option<KnownFormat>| {
            ObjectBuilder::new()
                .schema_type(ty)
                .format(format.map(SchemaFormat::KnownFormat))
        };

        ObjectBuilder::new()
            .property("itemName", field(Type::String, None))
            .property("itemCategory", field(Type::String, None))
            .property("itemPrice", field(Type::Number, Some(KnownFormat::Double)))
            .property("itemQty", field(Type::Integer, Some(KnownFormat::Int64)))
            .property("itemDescription", field(Type::String, None))
            .property("itemImage", field(Type::String, Some(KnownFormat::Binary)))
            .into()
    }
}

impl ToSchema for ItemUpload {}

#[utoipa::path(
    post,
    path = "/api/create",
    tag = "Item",
    security(("bearer_auth" = [])),
    request_body(content = ItemUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Item created", body = ApiResponse<ItemResponse>),
        (status = 400, description = "Missing image or invalid field", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn create_item(
    Extension(service): Extension<DynItemCommandService>,
    form: ItemForm,
) -> Result<impl IntoResponse, HttpError> {
    let request = form.into_create_request()?;
    let response = service.create_item(request).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Item",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All items", body = ApiResponse<Vec<ItemResponse>>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    )
)]
pub async fn get_items(
    Extension(service): Extension<DynItemQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/item/{id}",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item details", body = ApiResponse<ItemResponse>),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn get_item(
    Extension(service): Extension<DynItemQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/searchItem",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(SearchItemQuery),
    responses(
        (status = 200, description = "Items whose name contains the term", body = ApiResponse<Vec<ItemResponse>>)
    )
)]
pub async fn search_items(
    Extension(service): Extension<DynItemQueryService>,
    Query(query): Query<SearchItemQuery>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.search_by_name(&query.item_name).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/itemUpdate/{id}",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Item ID")),
    request_body(content = ItemUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Item updated", body = ApiResponse<ItemResponse>),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn update_item(
    Extension(service): Extension<DynItemCommandService>,
    Path(id): Path<String>,
    form: ItemForm,
) -> Result<impl IntoResponse, HttpError> {
    let request = form.into_update_request()?;
    let response = service.update_item(&id, request).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/deleteItem/{id}",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
pub async fn delete_item(
    Extension(service): Extension<DynItemCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_item(&id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/deleteImage/{imageKey}",
    tag = "Item",
    security(("bearer_auth" = [])),
    params(("imageKey" = String, Path, description = "Object key of the image")),
    responses(
        (status = 200, description = "Image deleted"),
        (status = 500, description = "Object storage failure", body = ErrorResponse)
    )
)]
pub async fn delete_image(
    Extension(service): Extension<DynItemCommandService>,
    Path(image_key): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_image(&image_key).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/uploads/{key}",
    tag = "Item",
    params(("key" = String, Path, description = "Object key of the image")),
    responses(
        (status = 200, description = "Image bytes", content_type = "application/octet-stream"),
        (status = 404, description = "No such object", body = ErrorResponse)
    )
)]
pub async fn serve_upload(
    Extension(service): Extension<DynItemQueryService>,
    Path(key): Path<String>,
) -> Result<Response, HttpError> {
    let object = service.fetch_image(&key).await?;
    let content_type = object
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_string());

    Ok(([(header::CONTENT_TYPE, content_type)], Body::from(object.bytes)).into_response())
}

pub fn item_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let items = &app_state.di_container.item_service;

    let public_routes = OpenApiRouter::new()
        .route("/uploads/{key}", get(serve_upload))
        .layer(Extension(items.query.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/create", post(create_item))
        .route("/api/items", get(get_items))
        .route("/api/item/{id}", get(get_item))
        .route("/api/searchItem", get(search_items))
        .route("/api/itemUpdate/{id}", patch(update_item))
        .route("/api/deleteItem/{id}", delete(delete_item))
        .route("/api/deleteImage/{imageKey}", delete(delete_image))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(items.query.clone()))
        .layer(Extension(items.command.clone()))
        .layer(Extension(UploadLimit(app_state.config.max_upload_bytes)))
        .layer(Extension(
            app_state.di_container.auth_service.identity.clone(),
        ));

    public_routes.merge(private_routes).with_state(app_state)
}
