use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use storelens_api::app::{build_app, services::AppServices};
use storelens_sources::{DataSource, FetchError};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(source: Arc<dyn DataSource>) -> Self {
        // Same wiring as prod: build services, populate the snapshot, then
        // bind to an ephemeral port.
        let services = Arc::new(AppServices::new(source, None));
        services.refresh().await;
        let app = build_app(services);

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
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn canned_products() -> Vec<Value> {
    vec![
        json!({"id": 1, "title": "Backpack", "price": 109.95,
            "category": "men's clothing", "rating": {"rate": 3.9, "count": 120}}),
        json!({"id": 2, "title": "T-Shirt", "price": 22.3,
            "category": "men's clothing", "rating": {"rate": 4.1, "count": 259}}),
        json!({"id": 3, "title": "Bracelet", "price": 695.0,
            "category": "jewelery", "rating": {"rate": 4.6, "count": 400}}),
    ]
}

fn canned_users() -> Vec<Value> {
    vec![json!({
        "name": {"first": "Brad", "last": "Gibson"},
        "location": {"state": "Kildare", "country": "Ireland"},
        "login": {"uuid": "u-77", "username": "silverkoala"},
        "dob": {"date": "1993-07-20T09:44:18.674Z"},
        "gender": "male",
        "email": "brad.gibson@example.com",
        "phone": "011-962-7516"
    })]
}

fn canned_transactions() -> Vec<Value> {
    vec![
        json!({"id": 900, "parcel_id": 1, "status": "shipped", "sender": "Depot",
            "user_phone": "011-962-7516", "user_name": "Brad Gibson"}),
        json!({"id": 901, "parcel_id": 999, "status": "pending",
            "user_name": "Nobody Known"}),
    ]
}

struct CannedSource;

#[async_trait]
impl DataSource for CannedSource {
    async fn fetch_products(&self) -> Result<Vec<Value>, FetchError> {
        Ok(canned_products())
    }

    async fn fetch_users(&self) -> Result<Vec<Value>, FetchError> {
        Ok(canned_users())
    }

    async fn fetch_transactions(&self) -> Result<Vec<Value>, FetchError> {
        Ok(canned_transactions())
    }
}

/// Returns one extra product on every fetch after the first.
struct GrowingSource {
    product_calls: AtomicUsize,
}

#[async_trait]
impl DataSource for GrowingSource {
    async fn fetch_products(&self) -> Result<Vec<Value>, FetchError> {
        let call = self.product_calls.fetch_add(1, Ordering::SeqCst);
        let mut products = canned_products();
        if call > 0 {
            products.push(json!({"id": 4, "title": "Lamp", "price": 12.0,
                "category": "home", "rating": {"rate": 2.0, "count": 5}}));
        }
        Ok(products)
    }

    async fn fetch_users(&self) -> Result<Vec<Value>, FetchError> {
        Ok(canned_users())
    }

    async fn fetch_transactions(&self) -> Result<Vec<Value>, FetchError> {
        Ok(canned_transactions())
    }
}

/// Transactions endpoint down, one malformed product record.
struct FlakySource;

#[async_trait]
impl DataSource for FlakySource {
    async fn fetch_products(&self) -> Result<Vec<Value>, FetchError> {
        Ok(vec![
            json!({"id": 1, "title": "Backpack", "price": 109.95}),
            json!({"title": "no id", "price": 1.0}),
        ])
    }

    async fn fetch_users(&self) -> Result<Vec<Value>, FetchError> {
        Ok(canned_users())
    }

    async fn fetch_transactions(&self) -> Result<Vec<Value>, FetchError> {
        Err(FetchError::Decode(
            serde_json::from_str::<Vec<Value>>("not json").unwrap_err(),
        ))
    }
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let srv = TestServer::spawn(Arc::new(CannedSource)).await;

    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn data_endpoint_serves_each_normalized_collection() {
    let srv = TestServer::spawn(Arc::new(CannedSource)).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/data/product", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let products: Value = res.json().await.unwrap();
    assert_eq!(products.as_array().unwrap().len(), 3);
    assert_eq!(products[0]["entity_type"], "product");
    assert_eq!(products[0]["data"]["title"], "Backpack");
    assert!(products[0]["entity_id"].is_string());
    assert!(products[0]["metadata"]["source"].is_string());

    let res = client
        .get(format!("{}/data/user", srv.base_url))
        .send()
        .await
        .unwrap();
    let users: Value = res.json().await.unwrap();
    assert_eq!(users.as_array().unwrap().len(), 1);
    assert_eq!(users[0]["data"]["name"], "Brad Gibson");

    let res = client
        .get(format!("{}/data/transaction", srv.base_url))
        .send()
        .await
        .unwrap();
    let transactions: Value = res.json().await.unwrap();
    assert_eq!(transactions.as_array().unwrap().len(), 2);
    assert_eq!(transactions[0]["data"]["transaction_id"], "900");
}

#[tokio::test]
async fn unknown_entity_type_is_rejected_with_choices() {
    let srv = TestServer::spawn(Arc::new(CannedSource)).await;

    let res = reqwest::get(format!("{}/data/orders", srv.base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_entity_type");
    assert_eq!(
        body["message"],
        "Invalid entity type. Choose from: product, user, transaction"
    );
}

#[tokio::test]
async fn user_insights_endpoint_serves_the_bundle() {
    let srv = TestServer::spawn(Arc::new(CannedSource)).await;

    let res = reqwest::get(format!("{}/insights/users", srv.base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["spending"]["Brad Gibson"], 1);
    assert_eq!(body["spending"]["Nobody Known"], 1);
    assert_eq!(body["most_active_user"], "Brad Gibson");
    assert_eq!(body["statistics"]["total_users"], 1);
    assert_eq!(body["statistics"]["gender_distribution"]["male"], 1);
    assert_eq!(body["inactive_users"], json!([]));
}

#[tokio::test]
async fn product_insights_endpoint_serves_the_bundle() {
    let srv = TestServer::spawn(Arc::new(CannedSource)).await;

    let res = reqwest::get(format!("{}/insights/products", srv.base_url))
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["popular_categories"][0][0], "jewelery");
    assert_eq!(body["popular_categories"][0][1], 400);
    assert_eq!(
        body["cheapest_and_most_expensive"]["cheapest_product"]["title"],
        "T-Shirt"
    );
    assert_eq!(
        body["cheapest_and_most_expensive"]["most_expensive_product"]["title"],
        "Bracelet"
    );
    assert_eq!(body["revenue_by_category"]["men's clothing"], 132.25);
    assert_eq!(body["most_rated"][0]["data"]["title"], "Bracelet");
}

#[tokio::test]
async fn refresh_swaps_in_a_new_snapshot() {
    let srv = TestServer::spawn(Arc::new(GrowingSource {
        product_calls: AtomicUsize::new(0),
    }))
    .await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/data/product", srv.base_url))
        .send()
        .await
        .unwrap();
    let before: Value = res.json().await.unwrap();
    assert_eq!(before.as_array().unwrap().len(), 3);

    let res = client
        .post(format!("{}/admin/refresh", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let summary: Value = res.json().await.unwrap();
    assert_eq!(summary["products"], 4);
    assert_eq!(summary["source_failures"], 0);

    let res = client
        .get(format!("{}/data/product", srv.base_url))
        .send()
        .await
        .unwrap();
    let after: Value = res.json().await.unwrap();
    assert_eq!(after.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn report_reflects_failures_and_skips() {
    let srv = TestServer::spawn(Arc::new(FlakySource)).await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/admin/report", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["source_failures"].as_array().unwrap().len(), 1);
    assert_eq!(body["source_failures"][0]["source"], "transactions");
    assert_eq!(body["skipped_records"].as_array().unwrap().len(), 1);
    assert_eq!(body["skipped_records"][0]["entity_type"], "product");
    assert_eq!(body["skipped_records"][0]["index"], 1);

    // The broken source degrades to an empty collection, not an error.
    let res = client
        .get(format!("{}/data/transaction", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let transactions: Value = res.json().await.unwrap();
    assert_eq!(transactions, json!([]));
}
