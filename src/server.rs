//! HTTP server wiring configuration, probe, and router together.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::probe::{HostProbe, MetricsProbe};
use crate::utils::shutdown_signal;

/// Status server constructed once at startup.
#[derive(Debug, Clone)]
pub struct Server {
    config: Config,
    probe: Arc<dyn MetricsProbe>,
}

impl Server {
    /// Server measuring the local host.
    pub fn new(config: Config) -> Self {
        Self::with_probe(config, Arc::new(HostProbe::new()))
    }

    /// Server with a custom metrics probe.
    pub fn with_probe(config: Config, probe: Arc<dyn MetricsProbe>) -> Self {
        Self { config, probe }
    }

    /// Configuration the server was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Address the server binds: all interfaces on the configured port.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.config.port))
    }

    /// Router serving the API for this server's configuration.
    pub fn router(&self) -> Router {
        create_router(AppState::with_probe(
            self.config.env.as_str(),
            Arc::clone(&self.probe),
        ))
    }

    /// Bind [`Server::addr`] and serve until Ctrl-C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let addr = self.addr();
        let listener = TcpListener::bind(addr).await?;
        info!("HTTP server listening on {}", addr);

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        info!(environment = %self.config.env, "Serving status API");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }
}
