mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

async fn register_and_login(app: &TestApp, username: &str) -> String {
    let email = format!("{username}@example.com");
    app.register_user(username, &email, "secret123").await;
    app.login_user(username, "secret123").await
}

async fn add_item(
    app: &TestApp,
    token: &str,
    item: &str,
    quantity: i32,
    price: &str,
) -> serde_json::Value {
    let response = app
        .post_authenticated("/cart", token)
        .json(&json!({ "item": item, "quantity": quantity, "price": price }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
async fn test_add_item_to_cart() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper1").await;

    let body = add_item(&app, &token, "laptop", 2, "999.99").await;

    assert!(body["id"].as_i64().is_some());
    assert_eq!(body["item"], "laptop");
    assert_eq!(body["quantity"], 2);
    assert_eq!(body["price"], "999.99");
    assert_eq!(body["total_price"], "1999.98");
    assert!(body["created_at"].is_string());
}

#[tokio::test]
async fn test_add_item_quantity_defaults_to_one() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper2").await;

    let response = app
        .post_authenticated("/cart", &token)
        .json(&json!({ "item": "mouse", "price": "19.99" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 1);
}

#[tokio::test]
async fn test_add_item_rejects_invalid_fields() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper3").await;

    let cases = [
        json!({ "item": "", "quantity": 1, "price": "9.99" }),
        json!({ "item": "x".repeat(101), "quantity": 1, "price": "9.99" }),
        json!({ "item": "pen", "quantity": 0, "price": "9.99" }),
        json!({ "item": "pen", "quantity": 1001, "price": "9.99" }),
        json!({ "item": "pen", "quantity": 1, "price": "-1.00" }),
    ];

    for payload in cases {
        let response = app
            .post_authenticated("/cart", &token)
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "payload should be rejected: {payload}"
        );
    }
}

#[tokio::test]
async fn test_get_item() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper4").await;
    let created = add_item(&app, &token, "keyboard", 1, "49.50").await;
    let item_id = created["id"].as_i64().unwrap();

    let response = app
        .get_authenticated(&format!("/cart/{item_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"], item_id);
    assert_eq!(body["item"], "keyboard");
    assert_eq!(body["price"], "49.50");
}

#[tokio::test]
async fn test_get_missing_item_returns_not_found() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper5").await;

    let response = app
        .get_authenticated("/cart/424242", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Cart item 424242 not found");
}

#[tokio::test]
async fn test_list_items() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper6").await;
    add_item(&app, &token, "book", 1, "12.00").await;
    add_item(&app, &token, "lamp", 2, "30.00").await;

    let response = app
        .get_authenticated("/cart", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let items = body.as_array().expect("Expected array body");
    assert_eq!(items.len(), 2);
    // Newest first
    assert_eq!(items[0]["item"], "lamp");
    assert_eq!(items[1]["item"], "book");
}

#[tokio::test]
async fn test_list_items_pagination() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper7").await;
    for n in 0..5 {
        add_item(&app, &token, &format!("item-{n}"), 1, "1.00").await;
    }

    let response = app
        .get_authenticated("/cart?skip=1&limit=2", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_items_rejects_invalid_page() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper8").await;

    for query in ["skip=-1", "limit=0", "limit=500"] {
        let response = app
            .get_authenticated(&format!("/cart?{query}"), &token)
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(
            response.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "query should be rejected: {query}"
        );
    }
}

#[tokio::test]
async fn test_update_item_partial() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper9").await;
    let created = add_item(&app, &token, "monitor", 1, "200.00").await;
    let item_id = created["id"].as_i64().unwrap();

    // Quantity only, price must be untouched
    let response = app
        .patch_authenticated(&format!("/cart/{item_id}"), &token)
        .json(&json!({ "quantity": 3 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["price"], "200.00");
    assert_eq!(body["total_price"], "600.00");

    // Price only, quantity must be untouched
    let response = app
        .patch_authenticated(&format!("/cart/{item_id}"), &token)
        .json(&json!({ "price": "150.00" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["quantity"], 3);
    assert_eq!(body["price"], "150.00");
}

#[tokio::test]
async fn test_update_missing_item_returns_not_found() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper10").await;

    let response = app
        .patch_authenticated("/cart/999", &token)
        .json(&json!({ "quantity": 2 }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_remove_item() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper11").await;
    let created = add_item(&app, &token, "cable", 1, "5.00").await;
    let item_id = created["id"].as_i64().unwrap();

    let response = app
        .delete_authenticated(&format!("/cart/{item_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .get_authenticated(&format!("/cart/{item_id}"), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_clear_cart() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper12").await;
    add_item(&app, &token, "a", 1, "1.00").await;
    add_item(&app, &token, "b", 1, "2.00").await;
    add_item(&app, &token, "c", 1, "3.00").await;

    let response = app
        .delete_authenticated("/cart", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deleted"], 3);
    assert_eq!(body["message"], "Cart cleared. Items removed: 3");

    let response = app
        .get_authenticated("/cart", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_cart_total() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper13").await;
    add_item(&app, &token, "widget", 3, "10.50").await;
    add_item(&app, &token, "gadget", 1, "4.25").await;

    let response = app
        .get_authenticated("/cart/summary/total", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    // 3 * 10.50 + 1 * 4.25
    assert_eq!(body["total_price"], "35.75");
}

#[tokio::test]
async fn test_cart_summary() {
    let app = TestApp::spawn().await;
    let token = register_and_login(&app, "shopper14").await;
    add_item(&app, &token, "widget", 2, "10.00").await;
    add_item(&app, &token, "gadget", 1, "5.00").await;

    let response = app
        .get_authenticated("/cart/summary/full", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total_items"], 2);
    assert_eq!(body["total_price"], "25.00");
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_cart_is_scoped_to_owner() {
    let app = TestApp::spawn().await;
    let token_a = register_and_login(&app, "owner_a").await;
    let token_b = register_and_login(&app, "owner_b").await;

    let created = add_item(&app, &token_a, "private-item", 1, "9.99").await;
    let item_id = created["id"].as_i64().unwrap();

    // Another user cannot see, update, or delete the item
    let response = app
        .get_authenticated(&format!("/cart/{item_id}"), &token_b)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .patch_authenticated(&format!("/cart/{item_id}"), &token_b)
        .json(&json!({ "quantity": 5 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .delete_authenticated(&format!("/cart/{item_id}"), &token_b)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Other user's listing is empty, and clearing their cart deletes nothing
    let response = app
        .get_authenticated("/cart", &token_b)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body.as_array().unwrap().len(), 0);

    let response = app
        .delete_authenticated("/cart", &token_b)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deleted"], 0);

    // Owner's item is still there
    let response = app
        .get_authenticated(&format!("/cart/{item_id}"), &token_a)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cart_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/cart")
        .json(&json!({ "item": "thing", "price": "1.00" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["detail"], "Not authenticated");
}
