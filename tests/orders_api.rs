use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use canteen::{config::Config, state::AppState, store::MemoryOrderStore};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::util::ServiceExt;

fn test_app() -> Router {
    let state = AppState::with_store(Config::load(), Arc::new(MemoryOrderStore::new()));

    canteen::app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn tea_order() -> Value {
    json!({
        "items": [{ "menuItemId": "m1", "name": "Tea", "price": 1.5, "quantity": 2 }],
        "totalAmount": 3.0
    })
}

async fn order_count(app: &Router) -> usize {
    let (_, body) = send(app, Method::GET, "/api/orders", None).await;

    body.as_array().unwrap().len()
}

#[tokio::test]
async fn test_menu_listing() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api/menu", None).await;
    assert_eq!(status, StatusCode::OK);

    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 5);
    assert_eq!(items[0]["name"], "Vegetable Samosa");
    assert_eq!(items[0]["category"], "Appetizer");
}

#[tokio::test]
async fn test_place_order_round_trip() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/api/orders", Some(tea_order())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Order created successfully!");

    let order_id = body["orderId"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, "/api/orders", None).await;
    assert_eq!(status, StatusCode::OK);

    let orders = body.as_array().unwrap();
    assert_eq!(orders.len(), 1);

    let order = &orders[0];
    assert_eq!(order["id"], order_id.as_str());
    assert_eq!(order["totalAmount"], 3.0);
    assert_eq!(order["status"], "Pending");
    assert_eq!(order["items"].as_array().unwrap().len(), 1);
    assert_eq!(order["items"][0]["menuItemId"], "m1");
    assert_eq!(order["items"][0]["name"], "Tea");
    assert_eq!(order["items"][0]["quantity"], 2);
}

#[tokio::test]
async fn test_rejects_empty_items() {
    let app = test_app();

    let payload = json!({ "items": [], "totalAmount": 0 });
    let (status, body) = send(&app, Method::POST, "/api/orders", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Missing required order data")
    );

    assert_eq!(order_count(&app).await, 0);
}

#[tokio::test]
async fn test_rejects_missing_total() {
    let app = test_app();

    let payload = json!({
        "items": [{ "menuItemId": "m5", "name": "Coke", "price": 1.25, "quantity": 1 }]
    });
    let (status, body) = send(&app, Method::POST, "/api/orders", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .contains("Missing required order data")
    );

    assert_eq!(order_count(&app).await, 0);
}

#[tokio::test]
async fn test_rejects_zero_quantity() {
    let app = test_app();

    let payload = json!({
        "items": [{ "menuItemId": "m5", "name": "Coke", "price": 1.25, "quantity": 0 }],
        "totalAmount": 0
    });
    let (status, body) = send(&app, Method::POST, "/api/orders", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("at least 1"));

    assert_eq!(order_count(&app).await, 0);
}

#[tokio::test]
async fn test_orders_listed_newest_first() {
    let app = test_app();

    for total_amount in [1.0, 2.0, 3.0] {
        let payload = json!({
            "items": [{ "menuItemId": "m5", "name": "Coke", "price": 1.25, "quantity": 1 }],
            "totalAmount": total_amount
        });

        let (status, _) = send(&app, Method::POST, "/api/orders", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = send(&app, Method::GET, "/api/orders", None).await;
    let totals: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|order| order["totalAmount"].as_f64().unwrap())
        .collect();

    assert_eq!(totals, [3.0, 2.0, 1.0]);
}

#[tokio::test]
async fn test_status_update_flow() {
    let app = test_app();

    let (_, body) = send(&app, Method::POST, "/api/orders", Some(tea_order())).await;
    let order_id = body["orderId"].as_str().unwrap().to_string();
    let status_uri = format!("/api/orders/{order_id}/status");

    let payload = json!({ "status": "Preparing" });
    let (status, body) = send(&app, Method::PATCH, &status_uri, Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Preparing");

    // Preparing -> Completed skips Ready and must be refused.
    let payload = json!({ "status": "Completed" });
    let (status, body) = send(&app, Method::PATCH, &status_uri, Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("cannot move"));

    let (_, body) = send(&app, Method::GET, "/api/orders", None).await;
    assert_eq!(body[0]["status"], "Preparing");
}

#[tokio::test]
async fn test_status_update_unknown_order() {
    let app = test_app();

    let payload = json!({ "status": "Preparing" });
    let (status, body) = send(&app, Method::PATCH, "/api/orders/999/status", Some(payload)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("not found"));
}
