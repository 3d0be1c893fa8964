use axum::http::StatusCode;
use axum_test::TestServer;
use market_sqlite::{Db, config::SqliteConfig};
use serde_json::{Value, json};

/// A test server over the real router and a fresh in-memory database.
pub async fn server() -> TestServer {
    let db = Db::open(&SqliteConfig::default())
        .await
        .expect("in-memory database");
    TestServer::new(market_axum::router(db)).unwrap()
}

pub async fn create_market(server: &TestServer, name: &str) -> Value {
    let response = server
        .post("/api/markets/")
        .json(&json!({
            "name": name,
            "location": "Berlin, Germany",
            "description": "A popular market in the city center.",
            "net_worth": "5000000.00"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn create_seller(server: &TestServer, name: &str, markets: Value) -> Value {
    let response = server
        .post("/api/sellers/")
        .json(&json!({
            "name": name,
            "contact_info": "john.doe@example.com, +49 123 456 789",
            "markets": markets
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn create_product(server: &TestServer, name: &str, seller: &Value, markets: Value) -> Value {
    let response = server
        .post("/api/products/")
        .json(&json!({
            "name": name,
            "description": "Fresh organic apples from local farms.",
            "price": "3.50",
            "seller": seller["id"],
            "markets": markets
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}
