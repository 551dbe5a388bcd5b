use std::sync::Arc;

use staticd::config::Config;
use staticd::server;
use tracing::Level;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = Config::load()?;

    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if cfg.server.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let cfg = Arc::new(cfg);

    tokio::select! {
        res = server::listener::run(cfg) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
