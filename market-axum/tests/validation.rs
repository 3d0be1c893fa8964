mod common;

use axum::http::{Method, StatusCode};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::market_blank_name(
    "/api/markets/",
    json!({ "name": "   ", "net_worth": "100000.00" }),
    "name",
    "This field may not be blank."
)]
#[case::market_negative_net_worth(
    "/api/markets/",
    json!({ "name": "Invalid Market", "net_worth": "-1000.00" }),
    "net_worth",
    "Net worth cannot be negative."
)]
#[case::market_excess_decimal_places(
    "/api/markets/",
    json!({ "name": "Market", "net_worth": "10.555" }),
    "net_worth",
    "Ensure that there are no more than 2 decimal places."
)]
#[case::market_null_name(
    "/api/markets/",
    json!({ "name": null, "net_worth": "100000.00" }),
    "name",
    "This field is required."
)]
#[case::seller_blank_name(
    "/api/sellers/",
    json!({ "name": "", "markets": [] }),
    "name",
    "This field may not be blank."
)]
#[case::seller_missing_markets(
    "/api/sellers/",
    json!({ "name": "Jane Smith" }),
    "markets",
    "This field is required."
)]
#[case::product_negative_price(
    "/api/products/",
    json!({ "name": "P", "description": "D", "price": "-10.00", "markets": [], "seller": 1 }),
    "price",
    "Price cannot be negative."
)]
#[case::product_blank_description(
    "/api/products/",
    json!({ "name": "P", "description": "", "price": "10.00", "markets": [], "seller": 1 }),
    "description",
    "This field may not be blank."
)]
#[case::product_missing_seller(
    "/api/products/",
    json!({ "name": "P", "description": "D", "price": "10.00", "markets": [] }),
    "seller",
    "This field is required."
)]
#[tokio::test]
async fn create_rejects_invalid_fields(
    #[case] path: &str,
    #[case] payload: Value,
    #[case] field: &str,
    #[case] message: &str,
) {
    let server = common::server().await;
    let response = server.post(path).json(&payload).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()[field], json!([message]));
}

#[tokio::test]
async fn missing_fields_are_reported_together() {
    let server = common::server().await;
    let response = server.post("/api/markets/").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "name": ["This field is required."],
            "net_worth": ["This field is required."]
        })
    );
}

#[tokio::test]
async fn unknown_market_fails_the_whole_seller_write() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;

    let response = server
        .post("/api/sellers/")
        .json(&json!({
            "name": "Jane Smith",
            "markets_ids": [market["id"], 999]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "markets": ["Invalid pk \"999\" - object does not exist."] })
    );

    // No seller was created
    let listed = server.get("/api/sellers/").await;
    assert_eq!(listed.json::<Value>(), json!([]));
}

#[tokio::test]
async fn unknown_relations_fail_the_product_write() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;
    let seller = common::create_seller(&server, "John Doe", json!([market["id"]])).await;

    let response = server
        .post("/api/products/")
        .json(&json!({
            "name": "Organic Apples",
            "description": "Fresh organic apples from local farms.",
            "price": "3.50",
            "markets": [market["id"]],
            "seller": 999
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "seller": ["Invalid pk \"999\" - object does not exist."] })
    );

    let response = server
        .post("/api/products/")
        .json(&json!({
            "name": "Organic Apples",
            "description": "Fresh organic apples from local farms.",
            "price": "3.50",
            "markets": [999],
            "seller": seller["id"]
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "markets": ["Invalid pk \"999\" - object does not exist."] })
    );

    assert_eq!(server.get("/api/products/").await.json::<Value>(), json!([]));
}

#[tokio::test]
async fn put_validates_the_full_payload() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;
    let id = market["id"].as_i64().unwrap();

    // PUT requires every required field, even if the row already has values
    let response = server
        .put(&format!("/api/markets/{id}/"))
        .json(&json!({ "location": "Munich, Germany" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["name"], json!(["This field is required."]));
    assert_eq!(body["net_worth"], json!(["This field is required."]));
}

#[tokio::test]
async fn patch_treats_null_as_absent() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;
    let id = market["id"].as_i64().unwrap();

    let response = server
        .patch(&format!("/api/markets/{id}/"))
        .json(&json!({ "name": null, "location": "Munich, Germany" }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["name"], "Central Market");
    assert_eq!(body["location"], "Munich, Germany");
}

#[rstest]
#[case::patch_markets("/api/markets/", Method::PATCH, "PATCH")]
#[case::put_sellers("/api/sellers/", Method::PUT, "PUT")]
#[case::delete_products("/api/products/", Method::DELETE, "DELETE")]
#[tokio::test]
async fn unsupported_collection_verbs_return_405(
    #[case] path: &str,
    #[case] method: Method,
    #[case] verb: &str,
) {
    let server = common::server().await;
    let response = server.method(method, path).await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": format!("Method \"{verb}\" not allowed.") })
    );
}

#[tokio::test]
async fn unsupported_detail_verb_returns_405() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;

    let response = server
        .method(Method::POST, &format!("/api/markets/{}/", market["id"]))
        .await;
    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "Method \"POST\" not allowed." })
    );
}

#[rstest]
#[case::market("/api/markets/999/", "Market not found")]
#[case::seller("/api/sellers/999/", "Seller not found")]
#[case::product("/api/products/999/", "Product not found")]
#[tokio::test]
async fn missing_rows_return_404(#[case] path: &str, #[case] message: &str) {
    let server = common::server().await;

    let get = server.get(path).await;
    get.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(get.json::<Value>(), json!({ "error": message }));

    let delete = server.delete(path).await;
    delete.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(delete.json::<Value>(), json!({ "error": message }));

    let patch = server.patch(path).json(&json!({ "name": "X" })).await;
    patch.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(patch.json::<Value>(), json!({ "error": message }));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let server = common::server().await;
    let response = server.get("/api-docs/openapi.json").await;
    response.assert_status_ok();
    let document = response.json::<Value>();
    assert!(document["paths"]["/api/markets/"].is_object());
}
