use api::{handler::AppRouter, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use shared::config::Config;
use std::collections::HashMap;
use tempfile::TempDir;
use tower::ServiceExt;

const BOUNDARY: &str = "coffee-shop-boundary";

async fn app(docs: &TempDir, extra: &[(&str, &str)]) -> Router {
    let mut env: HashMap<String, String> = [
        ("JWT_SECRET", "integration-secret"),
        ("SIMULATE_DYNAMO", "true"),
        ("BCRYPT_COST", "4"),
        ("SERVER_ADDRESS", "http://localhost:8070"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    env.insert(
        "DOCS_DIR".to_string(),
        docs.path().to_string_lossy().into_owned(),
    );
    for (k, v) in extra {
        env.insert(k.to_string(), v.to_string());
    }

    let config = Config::from_lookup(|key| env.get(key).cloned()).unwrap();
    let state = AppState::new(&config).await.unwrap();
    AppRouter::build(state)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

fn multipart(
    method: &str,
    uri: &str,
    token: &str,
    fields: &[(&str, &str)],
    file: Option<(&str, &[u8])>,
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((file_name, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"itemImage\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap()
}

async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({ "email": email, "password": "espresso" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"]["token"].as_str().unwrap().to_string()
}

async fn create_item(app: &Router, token: &str, name: &str, price: &str) -> Value {
    let (status, body) = send(
        app,
        multipart(
            "POST",
            "/api/create",
            token,
            &[
                ("itemName", name),
                ("itemCategory", "Hot Beverages"),
                ("itemPrice", price),
                ("itemQty", "10"),
                ("itemDescription", "Fresh"),
            ],
            Some(("cup photo.jpg", b"jpeg-bytes")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["data"].clone()
}

#[tokio::test]
async fn health_is_plain_ok() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[]).await;

    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn register_login_and_me() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[]).await;

    let token = register(&app, "barista@example.com").await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({ "email": "barista@example.com", "password": "espresso" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("data").is_none());

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": "barista@example.com", "password": "wrong" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "password");

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            None,
            json!({ "email": "nobody@example.com", "password": "espresso" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "email");

    let (status, body) = send(&app, get("/api/auth/me", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "barista@example.com");
    assert!(body["data"].get("password").is_none());
}

#[tokio::test]
async fn register_rejects_short_password() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[]).await;

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/register",
            None,
            json!({ "email": "barista@example.com", "password": "123" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn protected_routes_need_a_valid_token() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[]).await;

    let (status, _) = send(
        &app,
        Request::builder().uri("/api/items").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, get("/api/items", "not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = register(&app, "barista@example.com").await;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/items")
                .header(header::AUTHORIZATION, token)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn item_lifecycle_with_simulated_images() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[]).await;
    let token = register(&app, "barista@example.com").await;

    let (status, body) = send(
        &app,
        multipart(
            "POST",
            "/api/create",
            &token,
            &[("itemName", "Latte"), ("itemPrice", "5.49"), ("itemQty", "3")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No file uploaded.");

    let item = create_item(&app, &token, "Latte", "5.49").await;
    let id = item["id"].as_str().unwrap().to_string();
    let key = item["itemImage"].as_str().unwrap().to_string();
    assert!(key.starts_with("simulated-"));
    assert!(key.ends_with("-cup-photo.jpg"));
    assert_eq!(item["isS3Image"], true);
    assert_eq!(
        item["imageUrl"],
        format!("http://localhost:8070/uploads/{key}")
    );

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/uploads/{key}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"jpeg-bytes");

    let (status, body) = send(&app, get("/api/searchItem?itemName=LAT", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        multipart(
            "PATCH",
            &format!("/api/itemUpdate/{id}"),
            &token,
            &[("itemQty", "42")],
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["itemQty"], 42);
    assert_eq!(body["data"]["itemName"], "Latte");

    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/deleteItem/{id}"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, get(&format!("/api/item/{id}"), &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item not found");

    let (status, _) = send(
        &app,
        Request::builder()
            .uri(format!("/uploads/{key}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[("MAX_UPLOAD_BYTES", "8")]).await;
    let token = register(&app, "barista@example.com").await;

    let (status, body) = send(
        &app,
        multipart(
            "POST",
            "/api/create",
            &token,
            &[("itemName", "Latte"), ("itemPrice", "1"), ("itemQty", "1")],
            Some(("big.jpg", b"far more than eight bytes")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("File upload error:")
    );
}

#[tokio::test]
async fn order_flow_with_payment_quote() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[]).await;
    let token = register(&app, "barista@example.com").await;

    let (status, body) = send(
        &app,
        json_request("POST", "/order/create", Some(token.as_str()), json!({ "itemIds": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No items provided for the order");

    let item = create_item(&app, &token, "Mocha", "4.00").await;
    let id = item["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/order/create",
            Some(token.as_str()),
            json!({ "itemIds": [id, id, "gone"] }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let order = &body["data"];
    let order_id = order["id"].as_str().unwrap().to_string();
    assert_eq!(order["items"].as_array().unwrap().len(), 2);
    assert_eq!(order["itemIds"], json!([id, id, "gone"]));
    assert_eq!(order["totalPrice"], 8.0);

    let (status, body) = send(&app, get("/order/", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = send(
        &app,
        get(
            &format!("/order/{order_id}/payment?promotion=loyalty_bean_bonus&tendered=10"),
            &token,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["discount"], 2.0);
    assert_eq!(body["data"]["payable"], 6.0);
    assert_eq!(body["data"]["change"], 4.0);

    let (status, _) = send(
        &app,
        get(&format!("/order/{order_id}/payment?tendered=1"), &token),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/order/{order_id}"),
            Some(token.as_str()),
            json!({ "id": "hijack" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/order/{order_id}"),
            Some(token.as_str()),
            json!({ "note": "extra hot" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    let (status, _) = send(
        &app,
        Request::builder()
            .method("DELETE")
            .uri(format!("/order/{order_id}"))
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, get(&format!("/order/{order_id}"), &token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invoice_is_written_and_served() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[("SEED_SAMPLE_ITEMS", "true")]).await;
    let token = register(&app, "barista@example.com").await;

    let (status, body) = send(&app, get("/api/generate-invoice", &token)).await;
    assert_eq!(status, StatusCode::OK);

    let filename = body["filename"].as_str().unwrap().to_string();
    assert!(filename.starts_with("Item_Management_"));
    assert!(filename.ends_with("_doc.pdf"));
    assert_eq!(
        body["filepath"],
        format!("http://localhost:8070/docs/{filename}")
    );
    assert!(docs.path().join(&filename).exists());

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/docs/{filename}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let pdf = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn metrics_are_exposed() {
    let docs = TempDir::new().unwrap();
    let app = app(&docs, &[]).await;
    register(&app, "barista@example.com").await;

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&text).contains("register_service_request_counter"));
}
