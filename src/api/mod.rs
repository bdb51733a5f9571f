//! HTTP surface for the order service.
//!
//! Thin plumbing: handlers parse the body, delegate to the normalizer
//! and the store client, and shape the response JSON. All decision
//! logic lives in `normalizer` and `store_actor`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::{debug, info, warn};

use crate::clients::OrderStoreClient;
use crate::error::OrderError;
use crate::normalizer;

/// Binds and serves the API until the listener fails.
pub async fn serve(store: OrderStoreClient, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let app = router(store);

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn router(store: OrderStoreClient) -> Router {
    Router::new()
        .route("/api/orders", post(create_order).get(list_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(store)
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let status = match &self {
            OrderError::NotFound => StatusCode::NOT_FOUND,
            OrderError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        let body = match &self {
            OrderError::Internal(_) => {
                warn!(error = %self, "Request failed with server error");
                json!({"error": self.to_string(), "type": self.kind()})
            }
            _ => {
                debug!(error = %self, kind = self.kind(), "Request rejected");
                json!({"error": self.to_string()})
            }
        };
        (status, Json(body)).into_response()
    }
}

/// `POST /api/orders`
///
/// Takes the raw body so JSON syntax errors can be reported precisely
/// rather than as a framework rejection. An empty body counts as `{}`.
pub(crate) async fn create_order(
    State(store): State<OrderStoreClient>,
    body: String,
) -> Result<impl IntoResponse, OrderError> {
    debug!(raw = %body, "Received order payload");

    let payload: Value = if body.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(&body).map_err(|e| OrderError::MalformedJson(e.to_string()))?
    };

    let draft = normalizer::normalize(&payload)?;
    let order = store.append(draft).await?;

    info!(order_id = order.id, "Order placed");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "order": order,
            "message": "Order placed successfully!"
        })),
    ))
}

/// `GET /api/orders/{id}`
pub(crate) async fn get_order(
    State(store): State<OrderStoreClient>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, OrderError> {
    match store.get(id).await? {
        Some(order) => Ok(Json(json!({"success": true, "order": order}))),
        None => Err(OrderError::NotFound),
    }
}

/// `GET /api/orders`
pub(crate) async fn list_orders(
    State(store): State<OrderStoreClient>,
) -> Result<Json<Value>, OrderError> {
    let orders = store.list().await?;
    let total = orders.len();
    Ok(Json(json!({
        "success": true,
        "orders": orders,
        "total": total
    })))
}

/// `GET /api/health`
pub(crate) async fn health(
    State(store): State<OrderStoreClient>,
) -> Result<Json<Value>, OrderError> {
    let count = store.count().await?;
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "orders_count": count
    })))
}
