//! Smart canteen ordering backend.
//!
//! # General Infrastructure
//!
//! - Client fetches the menu, accumulates a cart locally, and submits it as one order
//! - Orders land in a swappable store: Redis when durability matters, in-memory for tests
//! - A kitchen display polls the order feed, newest first, and walks each order
//!   through its status machine
//! - One self-contained JSON document per order, so no multi-document transactions
//!
//! # Endpoints
//!
//! - `GET /api/menu`: the standing menu
//! - `POST /api/orders`: place an order, returns the new order id
//! - `GET /api/orders`: every order, newest first
//! - `PATCH /api/orders/{id}/status`: move an order along its status machine
//!
//! # Configuration
//!
//! - `RUST_PORT`: listen port, defaults to 3001
//! - `REDIS_URL`: defaults to `redis://127.0.0.1:6379`
//! - `ORDER_STORE`: `redis` or `memory`, defaults to `redis`
//!
//! # Setup
//!
//! Run against a local Redis.
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Run self-contained, no Redis needed.
//! ```sh
//! ORDER_STORE=memory RUST_LOG=info cargo run
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, patch},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod menu;
pub mod models;
pub mod orders;
pub mod routes;
pub mod state;
pub mod store;

use routes::{list_orders_handler, menu_handler, order_status_handler, place_order_handler};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/menu", get(menu_handler))
        .route(
            "/api/orders",
            get(list_orders_handler).post(place_order_handler),
        )
        .route("/api/orders/{id}/status", patch(order_status_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");
    let address = format!("0.0.0.0:{}", state.config.port);
    let app = app(state);

    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
