use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::{TcpListener, TcpStream};
use tracing::{Instrument, error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Pause after a failed accept so a persistent error (e.g. EMFILE) does not spin.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// A source of accepted client streams.
pub trait Accept: Send + Sync {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    fn accept(&self) -> impl Future<Output = std::io::Result<(Self::Stream, SocketAddr)>> + Send;
}

impl Accept for TcpListener {
    type Stream = TcpStream;

    fn accept(&self) -> impl Future<Output = std::io::Result<(TcpStream, SocketAddr)>> + Send {
        TcpListener::accept(self)
    }
}

/// Binds `server.listen_addr` and serves connections until the process stops.
pub async fn run(cfg: Arc<Config>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr)
        .await
        .with_context(|| format!("binding {}", cfg.server.listen_addr))?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, cfg).await
}

/// Accepts connections, one task per connection.
///
/// A failed accept is logged and the loop keeps going.
pub async fn serve<L: Accept>(listener: L, cfg: Arc<Config>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        if cfg.server.verbose {
            info!("Connection opened from {}", peer);
        }

        let cfg = Arc::clone(&cfg);
        let span = tracing::info_span!("conn", %peer);
        tokio::spawn(
            async move {
                if let Err(e) = Connection::new(socket, cfg).run().await {
                    error!("Connection error from {}: {:#}", peer, e);
                }
            }
            .instrument(span),
        );
    }
}
