//! Listener loop with a bounded graceful shutdown
//!
//! Once the shutdown signal fires the server stops accepting connections and
//! lets in-flight requests finish. Requests still running when the drain
//! timeout expires are abandoned.

use std::{io, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

/// Serve `app` on `listener` until `signal` completes, then drain for at most
/// `drain_timeout`
pub async fn serve<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    drain_timeout: Duration,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (signalled_tx, mut signalled_rx) = oneshot::channel();

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        signal.await;
        signalled_tx.send(()).ok();
    });
    let mut server = std::pin::pin!(server.into_future());

    tokio::select! {
        result = &mut server => return result,
        Ok(()) = &mut signalled_rx => {},
    }

    info!("Waiting up to {:?} for connections to close...", drain_timeout);

    match tokio::time::timeout(drain_timeout, &mut server).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                timeout = ?drain_timeout,
                "Connections still open after drain timeout, shutting down anyway"
            );
            Ok(())
        },
    }
}
