use anyhow::Context;
use clap::Parser;
use sentio::domain::config::ApiConfig;
use sentio::kernel::config::load_config;
use sentio::kernel::logging::init_logging;
use sentio_server::Server;
use std::path::PathBuf;

/// Tweet sentiment analysis API.
#[derive(Debug, Parser)]
#[command(name = "sentio-server", version, about)]
struct Cli {
    /// Configuration file; `config/server.toml` is used when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides `server.port`.
    #[arg(short, long)]
    port: Option<u16>,
}

#[sentio_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: ApiConfig = load_config(cli.config.as_deref(), "config/server")
        .context("Critical: Configuration is malformed")?;

    let _log = init_logging(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let mut builder = Server::builder().config(cfg);
    if let Some(port) = cli.port {
        builder = builder.port(port);
    }

    builder.build()?.run().await
}
