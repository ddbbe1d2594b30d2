//! HTTP Server
//!
//! Binds the listen address and serves the router until shut down.

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{McstatError, Result};
use crate::network::StatusClient;

use super::router;

/// HTTP server for the status endpoint
pub struct Server {
    config: Config,
    client: Arc<StatusClient>,
}

impl Server {
    /// Create a new server querying the configured target
    pub fn new(config: Config) -> Result<Self> {
        let client = Arc::new(StatusClient::new(config.clone())?);
        Self::with_client(config, client)
    }

    /// Create a new server around an existing client
    pub fn with_client(config: Config, client: Arc<StatusClient>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, client })
    }

    /// The router serving this server's routes
    pub fn router(&self) -> Router {
        router(Arc::clone(&self.client))
    }

    /// Multi-threaded runtime sized by `worker_threads`
    pub fn runtime(&self) -> Result<Runtime> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.worker_threads)
            .thread_name("mcstat-http")
            .enable_all()
            .build()?;
        Ok(runtime)
    }

    /// Bind the configured listen address
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind(&self.config.listen_addr).await.map_err(|e| {
            McstatError::Config(format!("cannot listen on {}: {}", self.config.listen_addr, e))
        })
    }

    /// Serve on `listener` until `shutdown` completes.
    ///
    /// In-flight requests are allowed to finish before this returns.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        tracing::info!("Running mcstat on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| McstatError::Http(e.to_string()))?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Bind and serve until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener, ctrl_c()).await
    }
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C, serving until killed: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
