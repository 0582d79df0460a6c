use anyhow::Context;
use clap::Parser;
use sentio_dashboard::Dashboard;
use sentio_domain::config::DashboardConfig;
use sentio_kernel::config::load_config;
use sentio_kernel::logging::init_logging;
use std::path::PathBuf;

/// Web dashboard for the tweet sentiment API.
#[derive(Debug, Parser)]
#[command(name = "sentio-dashboard", version, about)]
struct Cli {
    /// Configuration file; `config/dashboard.toml` is used when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides `server.port`.
    #[arg(short, long)]
    port: Option<u16>,

    /// Overrides `backend.url`.
    #[arg(long)]
    backend_url: Option<String>,
}

#[sentio_runtime::main(memory_efficient)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: DashboardConfig = load_config(cli.config.as_deref(), "config/dashboard")
        .context("Critical: Configuration is malformed")?;

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let mut builder = Dashboard::builder().config(cfg);
    if let Some(port) = cli.port {
        builder = builder.port(port);
    }
    if let Some(url) = cli.backend_url {
        builder = builder.backend_url(url);
    }

    builder.build()?.run().await
}
