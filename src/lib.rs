//! # mcstat
//!
//! A small status service for Minecraft servers:
//! - Legacy 1.6 Server List Ping (`FE 01`) over a bounded-time TCP session
//! - Decoding of the `00 00 00`-delimited response into a typed [`Status`]
//! - Explicit error outcomes for connect, I/O and malformed responses
//! - An HTTP endpoint that serves the status as JSON
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   HTTP Server (/status)                      │
//! │                    (axum on tokio)                           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ get_status(host, port)
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     StatusClient                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐   raw bytes  ┌─────────────┐
//!   │  Transport  │ ───────────▶ │   Status    │
//!   │   Session   │              │   Decoder   │
//!   └─────────────┘              └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod logging;
pub mod diagnostics;

pub mod protocol;
pub mod network;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, McstatError, Result};
pub use config::Config;
pub use diagnostics::{Diagnostics, TracingDiagnostics};
pub use logging::LogLevel;
pub use network::{Endpoint, StatusClient};
pub use protocol::Status;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mcstat
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Query the server at `host:port` once using the default timeouts.
///
/// Diagnostic events are forwarded to `tracing`.
pub fn get_status(host: &str, port: u16) -> Result<Status> {
    StatusClient::new(Config::default())?.get_status(host, port)
}
