use std::sync::Arc;

use tracing::info;

use crate::{
    config::{Config, StoreBackend},
    database::RedisOrderStore,
    menu::default_menu,
    models::MenuItem,
    store::{MemoryOrderStore, OrderStore},
};

pub struct AppState {
    pub config: Config,
    pub menu: Vec<MenuItem>,
    pub orders: Arc<dyn OrderStore>,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let orders: Arc<dyn OrderStore> = match config.order_store {
            StoreBackend::Redis => {
                info!("Using Redis order store at {}", config.redis_url);
                Arc::new(RedisOrderStore::connect(&config.redis_url).await)
            }
            StoreBackend::Memory => {
                info!("Using in-memory order store");
                Arc::new(MemoryOrderStore::new())
            }
        };

        Self::with_store(config, orders)
    }

    pub fn with_store(config: Config, orders: Arc<dyn OrderStore>) -> Arc<Self> {
        Arc::new(Self {
            config,
            menu: default_menu(),
            orders,
        })
    }
}
