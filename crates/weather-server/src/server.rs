//! TCP listener and top-level server wiring.
//!
//! This module:
//! - Listens on the configured address/port.
//! - Accepts new TCP connections.
//! - Assigns each connection a `ConnectionId`.
//! - Spawns a task per connection that runs the request/response loop.
//!
//! Connections share one `ResponseBuilder`; nothing else is shared
//! between them.

use std::future::Future;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, info_span, warn, Instrument};

use weather_core::ResponseBuilder;

use crate::config::Config;
use crate::connection::run_connection;
use crate::types::{ConnectionId, ConnectionTracker};

/// Pause after a failed accept, so a persistent failure (e.g. out of
/// file descriptors) does not spin the loop.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

fn next_connection_id() -> ConnectionId {
    ConnectionId(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
}

/// Bind the configured address and serve forever.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr_string();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    serve(listener, config, Arc::new(ResponseBuilder::new())).await
}

/// Accept connections on an already-bound listener.
///
/// Never returns once the listener is bound: failed accepts are logged
/// and retried, and per-connection errors stay in their own task.
pub async fn serve(
    listener: TcpListener,
    config: Config,
    builder: Arc<ResponseBuilder>,
) -> anyhow::Result<()> {
    let local = listener.local_addr()?;
    info!("Listening on {}", local);

    let tracker = ConnectionTracker::new();
    let listener = &listener;

    loop {
        let (stream, peer_addr) = accept_retrying(move || listener.accept()).await;

        let Some(slot) = tracker.try_acquire(config.max_clients) else {
            warn!(
                "Rejecting connection from {}: max_clients ({}) reached",
                peer_addr, config.max_clients
            );
            // Dropping the stream closes it.
            continue;
        };

        let id = next_connection_id();
        info!("Accepted connection {} from {}", id, peer_addr);

        let builder = Arc::clone(&builder);
        let io_timeout = config.io_timeout;
        let span = info_span!("conn", id = id.0, peer = %peer_addr);

        tokio::spawn(
            async move {
                let _slot = slot;
                match run_connection(stream, &builder, io_timeout).await {
                    Ok(served) => info!(served, "connection closed"),
                    Err(e) => error!("connection error: {}", e),
                }
            }
            .instrument(span),
        );
    }
}

/// Call `accept` until it succeeds, logging each failure.
///
/// Accept errors belong to the one pending connection (aborted
/// handshake, exhausted descriptors), never to the listener.
pub async fn accept_retrying<F, Fut, T>(mut accept: F) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = io::Result<T>>,
{
    loop {
        match accept().await {
            Ok(accepted) => return accepted,
            Err(e) => {
                warn!("accept failed: {}", e);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
            }
        }
    }
}
