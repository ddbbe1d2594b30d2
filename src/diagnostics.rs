//! Diagnostic sink
//!
//! The transport session and the decoder report what they are doing through
//! a [`Diagnostics`] value handed to them by the caller instead of a
//! process-wide logger. Every hook has an empty default body, so a sink only
//! implements the events it cares about.

use crate::error::McstatError;
use crate::network::Endpoint;
use crate::protocol::Status;

/// Receiver for events emitted while querying a server
pub trait Diagnostics: Send + Sync {
    /// About to open a connection
    fn connecting(&self, _endpoint: &Endpoint) {}

    /// The Server List Ping bytes were written
    fn handshake_sent(&self, _endpoint: &Endpoint) {}

    /// A response was read; `raw` holds only the bytes actually received
    fn response_received(&self, _endpoint: &Endpoint, _raw: &[u8]) {}

    /// The connection was closed
    fn connection_released(&self, _endpoint: &Endpoint) {}

    /// A response was decoded into a status
    fn decoded(&self, _status: &Status) {}

    /// A step failed; the error is also returned to the caller
    fn failed(&self, _error: &McstatError) {}
}

/// Forwards diagnostic events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn connecting(&self, endpoint: &Endpoint) {
        tracing::debug!("Attempting to open TCP connection to {}", endpoint);
    }

    fn handshake_sent(&self, endpoint: &Endpoint) {
        tracing::debug!("Sent Server List Ping to {}", endpoint);
    }

    fn response_received(&self, endpoint: &Endpoint, raw: &[u8]) {
        tracing::debug!(
            "Retrieved {} bytes from {}: {}",
            raw.len(),
            endpoint,
            hex(raw)
        );
    }

    fn connection_released(&self, endpoint: &Endpoint) {
        tracing::trace!("Closed connection to {}", endpoint);
    }

    fn decoded(&self, status: &Status) {
        tracing::debug!("Decoded status: {:?}", status);
    }

    fn failed(&self, error: &McstatError) {
        tracing::error!("Status query failed: {}", error);
    }
}

/// Uppercase hex without separators
fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02X}", b)).collect()
}

