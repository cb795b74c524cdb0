//! HTTP handlers for the order API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use order_desk_core::{Order, OrderSummary};
use order_desk_web::{AppError, AppState, CorrelationId, WebResult};
use serde::{Deserialize, Serialize};

/// Message returned alongside a newly stored order.
pub const ORDER_CREATED_MESSAGE: &str = "order added successfully";

/// Response after storing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    /// The stored order, as submitted
    pub order: Order,

    /// Confirmation message
    pub message: String,
}

/// Store a new order.
///
/// # Endpoint
///
/// ```text
/// POST /orders
/// Content-Type: application/json
///
/// {
///   "id": "1",
///   "title": "Standing desk",
///   "date": "2024-01-15",
///   "type": "furniture",
///   "customer": "alice"
/// }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "order": { "id": "1", "title": "Standing desk", "date": "2024-01-15", "type": "furniture", "customer": "alice" },
///   "message": "order added successfully"
/// }
/// ```
///
/// `409 Conflict` when the id is already stored; `422` when it is empty.
pub async fn create_order(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    Json(order): Json<Order>,
) -> WebResult<(StatusCode, Json<CreateOrderResponse>)> {
    if order.id.as_str().trim().is_empty() {
        return Err(AppError::validation("Order id must not be empty"));
    }

    tracing::info!(
        correlation_id = %correlation_id.0,
        order_id = %order.id,
        order_type = %order.order_type,
        "Creating order"
    );

    state.store.insert(order.clone()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            order,
            message: ORDER_CREATED_MESSAGE.to_string(),
        }),
    ))
}

/// Get a single order.
///
/// # Endpoint
///
/// ```text
/// GET /orders/:id
/// ```
///
/// Returns the order, or `404` with `"Order with id <id> not found"`.
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> WebResult<Json<Order>> {
    state
        .store
        .find_by_id(&order_id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::not_found("Order", &order_id))
}

/// Summarize orders of one type on one date.
///
/// # Endpoint
///
/// ```text
/// GET /orders/:type/:date
/// ```
///
/// `date` is a digit string (`20240115`). Always `200`:
///
/// ```json
/// {
///   "type": "furniture",
///   "count": 12,
///   "orders": ["3", "4", "5", "6", "7", "8", "9", "10", "11", "12"],
///   "related_customers": ["alice", "bob"]
/// }
/// ```
pub async fn summarize_orders(
    State(state): State<AppState>,
    Path((order_type, date)): Path<(String, String)>,
) -> Json<OrderSummary> {
    Json(state.store.summarize(&order_type, &date).await)
}
