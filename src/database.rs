//! # Redis
//!
//! Durable order storage.
//!
//! ## Requirements
//!
//! - One self-contained JSON document per order
//! - Atomic id assignment under concurrent submissions
//! - Insertion order preserved for the newest-first tie-break
//!
//! ## Key layout
//!
//! - `canteen:orders`: hash of order id to JSON document
//! - `canteen:orders:ids`: list of ids in insertion order
//! - `canteen:orders:next_id`: id counter, advanced with `INCR`
//!
//! A create is one atomic pipeline: `HSET` the document, `RPUSH` the id.
//! Reads walk the id list, so two orders stamped in the same millisecond
//! still come back in a defined order.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};

use crate::{
    models::{Order, OrderDraft, OrderStatus},
    store::{OrderStore, StoreError, advance, newest_first},
};

const ORDERS_KEY: &str = "canteen:orders";
const ORDER_IDS_KEY: &str = "canteen:orders:ids";
const NEXT_ID_KEY: &str = "canteen:orders:next_id";

pub async fn init_redis(redis_url: &str) -> ConnectionManager {
    let config = ConnectionManagerConfig::new()
        .set_number_of_retries(1)
        .set_connection_timeout(Duration::from_millis(100));

    let client = Client::open(redis_url).unwrap();
    let connection_manager = client
        .get_connection_manager_with_config(config)
        .await
        .unwrap();

    connection_manager
}

pub struct RedisOrderStore {
    connection: ConnectionManager,
}

impl RedisOrderStore {
    pub async fn connect(redis_url: &str) -> Self {
        Self {
            connection: init_redis(redis_url).await,
        }
    }

    async fn load(
        &self,
        connection: &mut ConnectionManager,
        id: &str,
    ) -> Result<Option<Order>, StoreError> {
        let body: Option<String> = connection.hget(ORDERS_KEY, id).await?;

        match body {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl OrderStore for RedisOrderStore {
    async fn create(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        let mut connection = self.connection.clone();

        let id: i64 = connection.incr(NEXT_ID_KEY, 1).await?;
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

        let body = serde_json::to_string(&order)?;
        let _: () = redis::pipe()
            .atomic()
            .hset(ORDERS_KEY, &order.id, body)
            .rpush(ORDER_IDS_KEY, &order.id)
            .query_async(&mut connection)
            .await?;

        Ok(order)
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let mut connection = self.connection.clone();

        let ids: Vec<String> = connection.lrange(ORDER_IDS_KEY, 0, -1).await?;
        let mut orders = Vec::with_capacity(ids.len());

        for id in &ids {
            if let Some(order) = self.load(&mut connection, id).await? {
                orders.push(order);
            }
        }

        Ok(newest_first(orders))
    }

    async fn update_status(&self, id: &str, next: OrderStatus) -> Result<Order, StoreError> {
        let mut connection = self.connection.clone();

        let mut order = self
            .load(&mut connection, id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        advance(&mut order, next)?;

        let body = serde_json::to_string(&order)?;
        let _: () = connection.hset(ORDERS_KEY, id, body).await?;

        Ok(order)
    }
}
