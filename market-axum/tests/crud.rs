mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
async fn market_lifecycle() {
    let server = common::server().await;

    // Create
    let market = common::create_market(&server, "Central Market").await;
    let id = market["id"].as_i64().unwrap();
    assert_eq!(market["name"], "Central Market");
    assert_eq!(market["net_worth"], "5000000.00");

    // Read back the same scalar values
    let fetched = server.get(&format!("/api/markets/{id}/")).await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>(), market);

    // The slashless detail path is an alias
    let bare = server.get(&format!("/api/markets/{id}")).await;
    bare.assert_status_ok();
    assert_eq!(bare.json::<Value>(), market);

    // List
    let listed = server.get("/api/markets/").await;
    listed.assert_status_ok();
    assert_eq!(listed.json::<Value>(), json!([market]));

    // Full update overwrites every field
    let updated = server
        .put(&format!("/api/markets/{id}/"))
        .json(&json!({
            "name": "Central Market",
            "location": "Munich, Germany",
            "net_worth": "6000000.00"
        }))
        .await;
    updated.assert_status_ok();
    let updated = updated.json::<Value>();
    assert_eq!(updated["location"], "Munich, Germany");
    // An omitted optional field falls back to its default, not the old value
    assert_eq!(updated["description"], "");

    // Partial update touches only the supplied field
    let patched = server
        .patch(&format!("/api/markets/{id}/"))
        .json(&json!({ "description": "X" }))
        .await;
    patched.assert_status_ok();
    let patched = patched.json::<Value>();
    assert_eq!(patched["description"], "X");
    assert_eq!(patched["location"], "Munich, Germany");
    assert_eq!(patched["net_worth"], "6000000.00");

    // Delete, then 404
    let deleted = server.delete(&format!("/api/markets/{id}/")).await;
    deleted.assert_status(StatusCode::NO_CONTENT);
    assert!(deleted.text().is_empty());

    let missing = server.get(&format!("/api/markets/{id}/")).await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(missing.json::<Value>(), json!({ "error": "Market not found" }));
}

#[tokio::test]
async fn collection_endpoints_answer_both_slash_forms() {
    let server = common::server().await;

    // The canonical trailing-slash form creates...
    let market = common::create_market(&server, "Central Market").await;

    // ...and both forms of the collection read it back
    let with_slash = server.get("/api/markets/").await;
    with_slash.assert_status_ok();
    assert_eq!(with_slash.json::<Value>(), json!([market]));

    let bare = server.get("/api/markets").await;
    bare.assert_status_ok();
    assert_eq!(bare.json::<Value>(), json!([market]));

    // The bare form accepts writes too
    let response = server
        .post("/api/sellers")
        .json(&json!({ "name": "Jane Smith", "markets": [market["id"]] }))
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn seller_read_shape_nests_markets() {
    let server = common::server().await;
    let downtown = common::create_market(&server, "Downtown Market").await;
    let central = common::create_market(&server, "Central Market").await;

    // The historical markets_ids spelling still works on writes
    let response = server
        .post("/api/sellers/")
        .json(&json!({
            "name": "Jane Smith",
            "contact_info": "jane.smith@example.com",
            "markets_ids": [central["id"], downtown["id"]]
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let seller = response.json::<Value>();

    assert_eq!(seller["name"], "Jane Smith");
    assert_eq!(seller["market_count"], 2);
    // Nested markets are full records, ordered by id
    assert_eq!(seller["markets"], json!([downtown, central]));
}

#[tokio::test]
async fn seller_put_replaces_markets_and_patch_preserves_them() {
    let server = common::server().await;
    let downtown = common::create_market(&server, "Downtown Market").await;
    let central = common::create_market(&server, "Central Market").await;
    let seller = common::create_seller(
        &server,
        "Jane Smith",
        json!([downtown["id"], central["id"]]),
    )
    .await;
    let id = seller["id"].as_i64().unwrap();

    // PUT clears-then-adds the relation set
    let updated = server
        .put(&format!("/api/sellers/{id}/"))
        .json(&json!({
            "name": "Jane Smith",
            "contact_info": "jane.smith@example.com",
            "markets": [central["id"]]
        }))
        .await;
    updated.assert_status_ok();
    assert_eq!(updated.json::<Value>()["markets"], json!([central]));

    // PATCH without the field leaves the set untouched
    let patched = server
        .patch(&format!("/api/sellers/{id}/"))
        .json(&json!({ "contact_info": "updated@example.com" }))
        .await;
    patched.assert_status_ok();
    let patched = patched.json::<Value>();
    assert_eq!(patched["contact_info"], "updated@example.com");
    assert_eq!(patched["markets"], json!([central]));
    assert_eq!(patched["market_count"], 1);
}

#[tokio::test]
async fn product_read_shape_nests_seller_and_markets() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;
    let seller = common::create_seller(&server, "John Doe", json!([market["id"]])).await;
    let product = common::create_product(&server, "Organic Apples", &seller, json!([market["id"]])).await;
    let id = product["id"].as_i64().unwrap();

    assert_eq!(product["name"], "Organic Apples");
    assert_eq!(product["price"], "3.50");
    assert_eq!(product["seller"], seller);
    assert_eq!(product["markets"], json!([market]));
    assert_eq!(product["market_count"], 1);

    // Price accepts a number on input and still reads back as a string
    let patched = server
        .patch(&format!("/api/products/{id}/"))
        .json(&json!({ "price": 20 }))
        .await;
    patched.assert_status_ok();
    let patched = patched.json::<Value>();
    assert_eq!(patched["price"], "20.00");
    assert_eq!(patched["name"], "Organic Apples");
    assert_eq!(patched["seller"], seller);
}

#[tokio::test]
async fn deleting_a_market_only_drops_the_association() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;
    let seller = common::create_seller(&server, "Jane Smith", json!([market["id"]])).await;
    let product = common::create_product(&server, "Organic Apples", &seller, json!([market["id"]])).await;

    server
        .delete(&format!("/api/markets/{}/", market["id"]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let seller = server
        .get(&format!("/api/sellers/{}/", seller["id"]))
        .await
        .json::<Value>();
    assert_eq!(seller["market_count"], 0);
    assert_eq!(seller["markets"], json!([]));

    let product = server
        .get(&format!("/api/products/{}/", product["id"]))
        .await
        .json::<Value>();
    assert_eq!(product["market_count"], 0);
}

#[tokio::test]
async fn deleting_a_seller_removes_its_products() {
    let server = common::server().await;
    let market = common::create_market(&server, "Central Market").await;
    let seller = common::create_seller(&server, "Jane Smith", json!([market["id"]])).await;
    let product = common::create_product(&server, "Organic Apples", &seller, json!([market["id"]])).await;

    server
        .delete(&format!("/api/sellers/{}/", seller["id"]))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/products/{}/", product["id"]))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    // The market itself survives
    server
        .get(&format!("/api/markets/{}/", market["id"]))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn health_endpoint_answers() {
    let server = common::server().await;
    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}
