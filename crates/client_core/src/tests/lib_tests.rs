use super::*;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use shared::domain::{Product, ProductId};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Debug)]
enum CapturedRequest {
    List { page: u32, limit: u32 },
    Create { body: Value },
    Update { id: i64, body: Value },
    Delete { id: i64 },
}

#[derive(Clone)]
struct ServerState {
    tx: Arc<Mutex<Option<oneshot::Sender<CapturedRequest>>>>,
    response_status: StatusCode,
    response_body: Value,
}

impl ServerState {
    async fn capture(&self, request: CapturedRequest) {
        if let Some(tx) = self.tx.lock().await.take() {
            let _ = tx.send(request);
        }
    }
}

#[derive(serde::Deserialize)]
struct ListParams {
    page: u32,
    limit: u32,
}

async fn handle_list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> (StatusCode, Json<Value>) {
    state
        .capture(CapturedRequest::List {
            page: params.page,
            limit: params.limit,
        })
        .await;
    (state.response_status, Json(state.response_body.clone()))
}

async fn handle_create(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.capture(CapturedRequest::Create { body }).await;
    (state.response_status, Json(state.response_body.clone()))
}

async fn handle_update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.capture(CapturedRequest::Update { id, body }).await;
    (state.response_status, Json(state.response_body.clone()))
}

async fn handle_delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<Value>) {
    state.capture(CapturedRequest::Delete { id }).await;
    (state.response_status, Json(state.response_body.clone()))
}

async fn spawn_catalog_server(
    response_status: StatusCode,
    response_body: Value,
) -> (String, oneshot::Receiver<CapturedRequest>) {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();
    let state = ServerState {
        tx: Arc::new(Mutex::new(Some(tx))),
        response_status,
        response_body,
    };
    let app = Router::new()
        .route("/products", get(handle_list))
        .route("/products", post(handle_create))
        .route("/products/:id", put(handle_update))
        .route("/products/:id", delete(handle_delete))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    (format!("http://{addr}"), rx)
}

fn sample_product(id: i64) -> Product {
    Product {
        id: Some(ProductId(id)),
        name: "Mouse".to_string(),
        price: 15.5,
        amount: 10,
        description: "RGB mouse".to_string(),
    }
}

#[tokio::test]
async fn list_products_sends_page_and_fixed_limit() {
    let (server_url, captured_rx) = spawn_catalog_server(
        StatusCode::OK,
        json!({
            "data": [sample_product(1)],
            "total_pages": 3,
            "current_page": 2,
        }),
    )
    .await;
    let client = CatalogClient::new(server_url);

    let page = client
        .list_products(2, DEFAULT_PAGE_SIZE)
        .await
        .expect("list products");

    match captured_rx.await.expect("captured request") {
        CapturedRequest::List { page, limit } => {
            assert_eq!(page, 2);
            assert_eq!(limit, DEFAULT_PAGE_SIZE);
        }
        other => panic!("unexpected request: {other:?}"),
    }
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.current_page, 2);
}

#[tokio::test]
async fn list_products_defaults_missing_pagination_fields() {
    let (server_url, _captured_rx) = spawn_catalog_server(StatusCode::OK, json!({})).await;
    let client = CatalogClient::new(server_url);

    let page = client
        .list_products(1, DEFAULT_PAGE_SIZE)
        .await
        .expect("list products");

    assert!(page.data.is_empty());
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.current_page, 1);
}

#[tokio::test]
async fn list_products_propagates_server_error() {
    let (server_url, _captured_rx) = spawn_catalog_server(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "Failed to retrieve products"}),
    )
    .await;
    let client = CatalogClient::new(server_url);

    let err = client
        .list_products(1, DEFAULT_PAGE_SIZE)
        .await
        .expect_err("must fail");
    assert!(err.to_string().contains("500"), "unexpected error: {err}");
}

#[tokio::test]
async fn create_product_posts_draft_without_id() {
    let (server_url, captured_rx) =
        spawn_catalog_server(StatusCode::CREATED, serde_json::to_value(sample_product(42)).unwrap())
            .await;
    let client = CatalogClient::new(server_url);

    let draft = Product {
        id: None,
        name: "Mouse".to_string(),
        price: 15.5,
        amount: 10,
        description: "RGB mouse".to_string(),
    };
    let created = client.create_product(&draft).await.expect("create product");

    match captured_rx.await.expect("captured request") {
        CapturedRequest::Create { body } => {
            assert!(body.get("id").is_none(), "draft must not send an id: {body}");
            assert_eq!(body["name"], "Mouse");
            assert_eq!(body["price"], 15.5);
            assert_eq!(body["amount"], 10);
        }
        other => panic!("unexpected request: {other:?}"),
    }
    assert_eq!(created.id, Some(ProductId(42)));
}

#[tokio::test]
async fn create_product_fails_on_validation_error() {
    let (server_url, _captured_rx) = spawn_catalog_server(
        StatusCode::BAD_REQUEST,
        json!({"error": "Invalid product data"}),
    )
    .await;
    let client = CatalogClient::new(server_url);

    let result = client.create_product(&Product::draft()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn update_product_puts_full_body_at_id() {
    let (server_url, captured_rx) =
        spawn_catalog_server(StatusCode::OK, serde_json::to_value(sample_product(7)).unwrap())
            .await;
    let client = CatalogClient::new(server_url);

    let product = sample_product(7);
    let updated = client
        .update_product(ProductId(7), &product)
        .await
        .expect("update product");

    match captured_rx.await.expect("captured request") {
        CapturedRequest::Update { id, body } => {
            assert_eq!(id, 7);
            assert_eq!(body["id"], 7);
            assert_eq!(body["name"], "Mouse");
            assert_eq!(body["description"], "RGB mouse");
        }
        other => panic!("unexpected request: {other:?}"),
    }
    assert_eq!(updated.id, Some(ProductId(7)));
}

#[tokio::test]
async fn delete_product_issues_delete_for_id() {
    let (server_url, captured_rx) = spawn_catalog_server(StatusCode::OK, json!({})).await;
    let client = CatalogClient::new(server_url);

    client
        .delete_product(ProductId(9))
        .await
        .expect("delete product");

    match captured_rx.await.expect("captured request") {
        CapturedRequest::Delete { id } => assert_eq!(id, 9),
        other => panic!("unexpected request: {other:?}"),
    }
}

#[tokio::test]
async fn delete_product_fails_for_unknown_id() {
    let (server_url, _captured_rx) =
        spawn_catalog_server(StatusCode::NOT_FOUND, json!({"error": "product not found"})).await;
    let client = CatalogClient::new(server_url);

    let err = client
        .delete_product(ProductId(404))
        .await
        .expect_err("must fail");
    let err_text = err.to_string();
    assert!(err_text.contains("404"), "unexpected error: {err_text}");
    assert!(
        err_text.contains("product not found"),
        "backend message must be preserved: {err_text}"
    );
}

#[test]
fn base_url_trims_trailing_slash() {
    let client = CatalogClient::new("http://localhost:8080/");
    assert_eq!(client.base_url(), "http://localhost:8080");
}
