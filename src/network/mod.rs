//! Network Module
//!
//! Querying a server over TCP.
//!
//! ## Architecture
//! - One connection per query, never reused
//! - resolve + connect → write `FE 01` → single read → close
//! - Resolution and all connect attempts share one connect deadline
//! - Queries share no state and may run concurrently

mod endpoint;
mod session;
mod client;

pub use endpoint::Endpoint;
pub use session::{connect_within, fetch_status, SessionOptions};
pub use client::StatusClient;
