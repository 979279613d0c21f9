//! Signal handling for graceful shutdown.

use tokio::signal::unix::{Signal, SignalKind, signal};

/// Completes when SIGTERM or SIGINT (Ctrl+C) arrives.
///
/// A signal whose handler cannot be installed is never waited on; if neither
/// can be installed the future stays pending and the process must be killed.
pub async fn shutdown_signal() {
    let mut sigterm = install(SignalKind::terminate(), "SIGTERM");
    let mut sigint = install(SignalKind::interrupt(), "SIGINT");

    tokio::select! {
        Some(()) = recv(&mut sigterm) => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
        Some(()) = recv(&mut sigint) => {
            tracing::info!("Received SIGINT, initiating graceful shutdown");
        }
        else => std::future::pending::<()>().await,
    }
}

fn install(kind: SignalKind, name: &str) -> Option<Signal> {
    signal(kind)
        .inspect_err(|e| tracing::warn!(error = %e, "Failed to install {} handler", name))
        .ok()
}

async fn recv(signal: &mut Option<Signal>) -> Option<()> {
    match signal {
        Some(signal) => signal.recv().await,
        None => None,
    }
}
