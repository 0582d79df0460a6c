//! # Sentio Dashboard
//!
//! Single-page UI for the sentiment API. The page talks only to this server,
//! which proxies to the backend with retries and a cached health verdict.
//!
//! ## Example
//! ```no_run
//! use sentio_dashboard::Dashboard;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Dashboard::builder().backend_url("http://localhost:8000").build()?.run().await
//! }
//! ```

pub mod client;
pub mod error;
pub mod export;
mod handlers;
mod router;
pub mod state;
pub mod view;

pub use crate::client::{BackendClient, RetryPolicy};
pub use crate::error::DashboardError;
pub use crate::handlers::{EXAMPLES, StatusView};
pub use crate::state::DashboardState;
pub use crate::view::AnalysisView;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use sentio_domain::config::DashboardConfig;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{error, info};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Dashboard`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct DashboardBuilder {
    cfg: DashboardConfig,
}

impl DashboardBuilder {
    pub fn config(mut self, cfg: DashboardConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    pub fn backend_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.backend.url = url.into();
        self
    }

    /// # Errors
    /// Returns an error if the backend client cannot be built.
    pub fn build(self) -> Result<Dashboard> {
        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(address = %address, backend = %self.cfg.backend.url, "Initializing dashboard");

        let state = DashboardState::new(self.cfg).context("Failed to initialize dashboard state")?;
        let router = router::init(state.clone());

        Ok(Dashboard { state, router })
    }
}

/// A fully initialized dashboard ready to run.
#[must_use = "call .run().await to start the dashboard"]
#[derive(Debug)]
pub struct Dashboard {
    state: DashboardState,
    router: Router,
}

impl Dashboard {
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    /// Serves the dashboard until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if binding or TLS setup fails.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = sentio_runtime::shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, stopping dashboard...");
            shutdown_handle.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        if let Some(ssl) = &cfg.server.ssl {
            info!("Dashboard available at https://{address}");

            let tls = axum_server::tls_rustls::RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
                .await
                .context("Failed to load SSL/TLS certificates")?;

            axum_server::bind_rustls(address, tls)
                .handle(handle)
                .serve(self.router.into_make_service())
                .await
                .context("Dashboard server failed")?;
        } else {
            info!("Dashboard available at http://{address}");

            axum_server::bind(address)
                .handle(handle)
                .serve(self.router.into_make_service())
                .await
                .context("Dashboard server failed")?;
        }

        info!("Dashboard shutdown complete");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The assembled router, for in-process use.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}
