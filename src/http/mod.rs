//! HTTP Module
//!
//! Serves the status of the configured server as JSON.
//!
//! ## Routes
//! - `GET /status` → `200` + status JSON, or `500` if the query failed
//! - anything else → `404` (`405` for other methods on `/status`)
//!
//! ## Architecture
//! - `axum` router on a multi-threaded `tokio` runtime
//! - Status queries run on the blocking pool, one session per request

mod routes;
mod server;

pub use routes::{router, STATUS_PATH};
pub use server::Server;
