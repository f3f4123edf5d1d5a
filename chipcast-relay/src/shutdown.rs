//! Signal handling for graceful shutdown.

use tokio::signal::unix::{SignalKind, signal};
use tokio::sync::watch;

/// Flips the returned receiver to `true` once a shutdown signal arrives.
///
/// Signal handlers are installed before this returns, so a failure to
/// install them is reported to the caller instead of being lost in a task.
pub fn spawn_shutdown_handler() -> std::io::Result<watch::Receiver<bool>> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM, initiating graceful shutdown");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT, initiating graceful shutdown");
            }
        }
        // Receivers treat a dropped sender as shutdown as well.
        let _ = shutdown_tx.send(true);
    });

    Ok(shutdown_rx)
}
