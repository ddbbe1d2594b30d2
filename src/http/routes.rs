//! Routes
//!
//! `GET /status` runs one status query against the configured server.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::network::StatusClient;
use crate::protocol::Status;

/// Path serving the status
pub const STATUS_PATH: &str = "/status";

/// Build the application router around a shared client
pub fn router(client: Arc<StatusClient>) -> Router {
    Router::new()
        .route(STATUS_PATH, get(status_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(client)
}

/// Status handler
///
/// Any failure becomes a `500` without a body. The client's diagnostics
/// sink has already reported the error by the time the handler sees it.
async fn status_handler(
    State(client): State<Arc<StatusClient>>,
) -> Result<Json<Status>, StatusCode> {
    tracing::info!("Getting status from {}", client.target());

    // The session blocks on its socket, so it runs on the blocking pool
    let result = tokio::task::spawn_blocking(move || client.status())
        .await
        .map_err(|e| {
            tracing::error!("Status query task failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    match result {
        Ok(status) => {
            tracing::info!("Retrieved status from server: {:?}", status);
            Ok(Json(status))
        }
        Err(_) => Err(StatusCode::INTERNAL_SERVER_ERROR),
    }
}
