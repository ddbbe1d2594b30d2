//! Status client
//!
//! Composes the transport session and the decoder into `get_status`.

use std::sync::Arc;

use crate::config::Config;
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use crate::error::Result;
use crate::protocol::{decode, Status};

use super::{fetch_status, Endpoint, SessionOptions};

/// Queries servers for their status
///
/// Holds only configuration, so one client can be shared between threads
/// and queried concurrently.
pub struct StatusClient {
    config: Config,
    options: SessionOptions,
    diagnostics: Arc<dyn Diagnostics>,
}

impl StatusClient {
    /// Create a client that reports to `tracing`
    pub fn new(config: Config) -> Result<Self> {
        Self::with_diagnostics(config, Arc::new(TracingDiagnostics))
    }

    /// Create a client reporting to the given sink.
    ///
    /// Fails if the config leaves any session step without a time bound.
    pub fn with_diagnostics(config: Config, diagnostics: Arc<dyn Diagnostics>) -> Result<Self> {
        config.validate()?;
        let options = SessionOptions::from(&config);
        Ok(Self {
            config,
            options,
            diagnostics,
        })
    }

    /// Query `host:port` once
    pub fn get_status(&self, host: &str, port: u16) -> Result<Status> {
        let endpoint = Endpoint::new(host, port);
        let sink: Option<&dyn Diagnostics> = Some(&*self.diagnostics);

        let raw = fetch_status(&endpoint, &self.options, sink)?;
        decode(raw.as_bytes(), sink)
    }

    /// Query the configured server
    pub fn status(&self) -> Result<Status> {
        self.get_status(&self.config.server_host, self.config.server_port)
    }

    /// The configured server
    pub fn target(&self) -> Endpoint {
        Endpoint::new(self.config.server_host.clone(), self.config.server_port)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
