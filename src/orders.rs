use std::sync::Arc;

use tracing::info;

use crate::{
    error::AppError,
    models::{Order, OrderDraft, OrderLineItem, OrderStatus},
    state::AppState,
};

/// Checks a raw submission and shapes it into a draft the store accepts.
///
/// Both fields arrive as `Option` so an absent field is reported as missing
/// order data rather than a decode failure.
pub fn validate_submission(
    items: Option<Vec<OrderLineItem>>,
    total_amount: Option<f64>,
) -> Result<OrderDraft, AppError> {
    let (Some(items), Some(total_amount)) = (items, total_amount) else {
        return Err(AppError::MissingOrderData);
    };

    OrderDraft::new(items, total_amount)
}

pub async fn submit_order(
    state: Arc<AppState>,
    items: Option<Vec<OrderLineItem>>,
    total_amount: Option<f64>,
) -> Result<Order, AppError> {
    let draft = validate_submission(items, total_amount)?;
    let order = state.orders.create(draft).await?;

    info!("Order {} created ({} items)", order.id, order.items.len());

    Ok(order)
}

pub async fn fetch_orders(state: Arc<AppState>) -> Result<Vec<Order>, AppError> {
    Ok(state.orders.list_all().await?)
}

pub async fn change_status(
    state: Arc<AppState>,
    id: &str,
    next: OrderStatus,
) -> Result<Order, AppError> {
    let order = state.orders.update_status(id, next).await?;

    info!("Order {} moved to {}", order.id, order.status);

    Ok(order)
}
