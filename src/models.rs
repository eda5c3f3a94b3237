use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
}

/// One menu selection inside an order. Name and price are copied from the
/// menu at submission time, so later menu edits never rewrite order history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub menu_item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether the kitchen may move an order from `self` to `next`.
    ///
    /// Orders walk Pending -> Preparing -> Ready -> Completed one step at a
    /// time; Cancelled is reachable from any non-terminal state.
    pub fn can_become(self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        match (self, next) {
            (Pending, Preparing) | (Preparing, Ready) | (Ready, Completed) => true,
            (from, Cancelled) => !from.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        };

        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLineItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A checked order submission. The only way to build one is
/// [`OrderDraft::new`], so every store backend starts from valid data.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    items: Vec<OrderLineItem>,
    total_amount: f64,
}

impl OrderDraft {
    pub fn new(items: Vec<OrderLineItem>, total_amount: f64) -> Result<Self, AppError> {
        if items.is_empty() {
            return Err(AppError::MissingOrderData);
        }

        if items.iter().any(|item| item.quantity < 1) {
            return Err(AppError::InvalidQuantity);
        }

        Ok(Self {
            items,
            total_amount,
        })
    }

    pub fn into_parts(self) -> (Vec<OrderLineItem>, f64) {
        (self.items, self.total_amount)
    }
}
