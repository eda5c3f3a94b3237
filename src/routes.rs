use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::AppError,
    models::{MenuItem, Order, OrderLineItem, OrderStatus},
    orders::{change_status, fetch_orders, submit_order},
    state::AppState,
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    pub items: Option<Vec<OrderLineItem>>,
    pub total_amount: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPlaced {
    pub message: &'static str,
    pub order_id: String,
}

#[derive(Deserialize)]
pub struct StatusChange {
    pub status: OrderStatus,
}

pub async fn menu_handler(State(state): State<Arc<AppState>>) -> Json<Vec<MenuItem>> {
    Json(state.menu.clone())
}

pub async fn place_order_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PlaceOrder>,
) -> Result<impl IntoResponse, AppError> {
    let order = submit_order(state, payload.items, payload.total_amount).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderPlaced {
            message: "Order created successfully!",
            order_id: order.id,
        }),
    ))
}

pub async fn list_orders_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(fetch_orders(state).await?))
}

pub async fn order_status_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<StatusChange>,
) -> Result<Json<Order>, AppError> {
    Ok(Json(change_status(state, &id, payload.status).await?))
}
