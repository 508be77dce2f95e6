//! Stops the server gracefully on Ctrl+C or SIGTERM.

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Blocks until a shutdown signal arrives, then drains open connections.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    wait_for_signal().await?;

    tracing::info!("shutdown signal received, draining connections");
    handle.stop_graceful(None);

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<(), ShutdownSignalError> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .map_err(ShutdownSignalError::SigTerm)?;

    tokio::select! {
        result = signal::ctrl_c() => result.map_err(ShutdownSignalError::CtrlC)?,
        _ = sigterm.recv() => {}
    }

    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<(), ShutdownSignalError> {
    signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)
}
