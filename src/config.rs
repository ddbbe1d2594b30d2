//! Configuration for mcstat
//!
//! Centralized configuration with sensible defaults.

use crate::error::{McstatError, Result};
use crate::logging::LogLevel;

/// Main configuration for an mcstat instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Target Configuration
    // -------------------------------------------------------------------------
    /// Address of the Minecraft server to query
    pub server_host: String,

    /// Port the Minecraft server listens on
    pub server_port: u16,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Connect timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Read timeout for the ping response (milliseconds)
    pub read_timeout_ms: u64,

    /// Write timeout for the handshake (milliseconds)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // HTTP Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address (host:port)
    pub listen_addr: String,

    /// Worker threads of the HTTP runtime
    pub worker_threads: usize,

    // -------------------------------------------------------------------------
    // Logging Configuration
    // -------------------------------------------------------------------------
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 25565,
            connect_timeout_ms: 5000,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            listen_addr: "0.0.0.0:8080".to_string(),
            worker_threads: 4,
            log_level: LogLevel::Info,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Reject settings the session or the HTTP server cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.server_host.is_empty() {
            return Err(McstatError::Config("server host must not be empty".to_string()));
        }
        if self.server_port == 0 {
            return Err(McstatError::Config("server port must be in 1..=65535".to_string()));
        }
        if self.connect_timeout_ms == 0 {
            return Err(McstatError::Config("connect timeout must be non-zero".to_string()));
        }
        if self.read_timeout_ms == 0 {
            return Err(McstatError::Config("read timeout must be non-zero".to_string()));
        }
        if self.write_timeout_ms == 0 {
            return Err(McstatError::Config("write timeout must be non-zero".to_string()));
        }
        if self.worker_threads == 0 {
            return Err(McstatError::Config("at least one worker thread is required".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the Minecraft server address
    pub fn server_host(mut self, host: impl Into<String>) -> Self {
        self.config.server_host = host.into();
        self
    }

    /// Set the Minecraft server port
    pub fn server_port(mut self, port: u16) -> Self {
        self.config.server_port = port;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Listen on all interfaces at the given HTTP port
    pub fn listen_port(mut self, port: u16) -> Self {
        self.config.listen_addr = format!("0.0.0.0:{}", port);
        self
    }

    /// Set the number of HTTP runtime worker threads
    pub fn worker_threads(mut self, count: usize) -> Self {
        self.config.worker_threads = count;
        self
    }

    /// Set the log level
    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.config.log_level = level;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
