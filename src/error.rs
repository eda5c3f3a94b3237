use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required order data (items, totalAmount).")]
    MissingOrderData,

    #[error("Order item quantities must be at least 1.")]
    InvalidQuantity,

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingOrderData | AppError::InvalidQuantity => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Store(StoreError::InvalidStatusChange { .. }) => StatusCode::BAD_REQUEST,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            warn!("{self}");
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
