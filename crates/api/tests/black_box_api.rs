use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use storefront_api::app::services::{self, AppServices};
use storefront_catalog::{InMemoryCatalog, Product};
use storefront_contact::{ContactMessageStore, InMemoryContactMessageStore};
use storefront_core::ProductId;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(services: AppServices) -> Self {
        // Same router as prod, bound to an ephemeral port.
        let app = storefront_api::app::build_app(services);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn seeded() -> Self {
        Self::spawn(services::build_services().unwrap()).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn contact_body() -> serde_json::Value {
    json!({
        "name": "Sara Ahmed",
        "email": "sara@example.com",
        "phone": "03001234567",
        "message": "Do you deliver to Lahore?"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let srv = TestServer::seeded().await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_seeded_products_in_order() {
    let srv = TestServer::seeded().await;

    let res = reqwest::get(format!("{}/api/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<serde_json::Value> = res.json().await.unwrap();
    let slugs: Vec<&str> = body.iter().map(|p| p["slug"].as_str().unwrap()).collect();
    assert_eq!(
        slugs,
        vec!["premium-cotton-kurta", "peshawari-chappal", "wireless-earbuds", "smart-watch"]
    );
    assert_eq!(body[0]["price"], 2500);
    assert_eq!(body[0]["originalPrice"], 3000);
    assert!(body[0]["stockCount"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn product_list_filters_by_category_and_sorts() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let body: Vec<serde_json::Value> = client
        .get(format!("{}/api/products?category=Electronics&sort=price-desc", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let slugs: Vec<&str> = body.iter().map(|p| p["slug"].as_str().unwrap()).collect();
    assert_eq!(slugs, vec!["smart-watch", "wireless-earbuds"]);

    let body: Vec<serde_json::Value> = client
        .get(format!("{}/api/products?sort=newest", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body[0]["slug"], "smart-watch");
    assert_eq!(body[3]["slug"], "premium-cotton-kurta");

    let res = client
        .get(format!("{}/api/products?sort=cheapest", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert!(err["message"].as_str().is_some());
}

#[tokio::test]
async fn product_by_slug_hit_and_miss() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/products/smart-watch", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: Product = res.json().await.unwrap();
    assert_eq!(product.name, "Smart Watch");
    assert_eq!(product.price, 5500);

    let res = client
        .get(format!("{}/api/products/no-such-thing", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Product not found" }));
}

#[tokio::test]
async fn serves_a_custom_catalog() {
    let mut p = Product::new(ProductId::new("x1").unwrap(), "Brass Lamp", 1800, 4);
    p.slug = "brass-lamp".to_string();
    let catalog = InMemoryCatalog::with_products(vec![p]);
    let srv = TestServer::spawn(AppServices::new(
        Arc::new(catalog),
        Arc::new(InMemoryContactMessageStore::new()),
    ))
    .await;

    let body: Vec<serde_json::Value> = reqwest::get(format!("{}/api/products", srv.base_url))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["id"], "x1");
    assert_eq!(body[0]["slug"], "brass-lamp");
}

#[tokio::test]
async fn contact_submission_is_stored() {
    let contacts = Arc::new(InMemoryContactMessageStore::new());
    let srv = TestServer::spawn(AppServices::new(
        Arc::new(InMemoryCatalog::new()),
        contacts.clone(),
    ))
    .await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/contact", srv.base_url))
        .json(&contact_body())
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "success": true }));

    let stored = contacts.list();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].email, "sara@example.com");
}

#[tokio::test]
async fn contact_validation_reports_first_field() {
    let srv = TestServer::seeded().await;
    let client = reqwest::Client::new();

    let mut body = contact_body();
    body["email"] = json!("not-an-email");
    let res = client
        .post(format!("{}/api/contact", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err, json!({ "message": "Invalid email", "field": "email" }));

    // Missing fields are validated like blank ones, in form order.
    let res = client
        .post(format!("{}/api/contact", srv.base_url))
        .json(&json!({ "email": "sara@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert_eq!(err["field"], "name");
    assert_eq!(err["message"], "Name is required");
}

#[tokio::test]
async fn malformed_contact_body_is_bad_request() {
    let srv = TestServer::seeded().await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/contact", srv.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = res.json().await.unwrap();
    assert!(err["message"].as_str().is_some());
}
