//! # Order Store
//!
//! Persistence boundary for orders: one trait, swappable backends.
//!
//! The durable backend lives in [`crate::database`]; the in-memory backend
//! below backs tests and `ORDER_STORE=memory` deployments. Both assign ids
//! from a counter the store owns and stamp `createdAt`/`updatedAt` on write,
//! so callers never invent identity or time.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use thiserror::Error;

use crate::models::{Order, OrderDraft, OrderStatus};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Order {0} not found.")]
    NotFound(String),

    #[error("Order cannot move from {from} to {to}.")]
    InvalidStatusChange {
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order storage unreachable: {0}")]
    Backend(#[from] redis::RedisError),

    #[error("Stored order is unreadable: {0}")]
    Codec(#[from] serde_json::Error),
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists a new order, assigning its id and timestamps. All-or-nothing
    /// per order document.
    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError>;

    /// Every persisted order, newest first.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;

    /// Moves an order one step along the status machine and stamps
    /// `updatedAt`.
    async fn update_status(&self, id: &str, next: OrderStatus) -> Result<Order, StoreError>;
}

/// Newest first; equal timestamps fall back to reverse insertion order.
pub(crate) fn newest_first(mut orders: Vec<Order>) -> Vec<Order> {
    orders.reverse();
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    orders
}

pub(crate) fn advance(order: &mut Order, next: OrderStatus) -> Result<(), StoreError> {
    if !order.status.can_become(next) {
        return Err(StoreError::InvalidStatusChange {
            from: order.status,
            to: next,
        });
    }

    order.status = next;
    order.updated_at = Utc::now();

    Ok(())
}

pub struct MemoryOrderStore {
    next_id: AtomicU64,
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            orders: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (items, total_amount) = draft.into_parts();
        let now = Utc::now();

        let order = Order {
            id: id.to_string(),
            items,
            total_amount,
            status: OrderStatus::default(),
            created_at: now,
            updated_at: now,
        };

        self.orders.write().push(order.clone());

        Ok(order)
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        Ok(newest_first(self.orders.read().clone()))
    }

    async fn update_status(&self, id: &str, next: OrderStatus) -> Result<Order, StoreError> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|order| order.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        advance(order, next)?;

        Ok(order.clone())
    }
}
