//! OS signal handling.
//!
//! - SIGINT / SIGTERM: final slow refresh, last publish, clean exit
//! - SIGUSR1: slow refresh only
//!
//! Signals are received as tokio streams, so nothing runs in async-signal
//! context. Each delivery becomes a [`RunState`] transition that the
//! scheduler picks up at its next wakeup.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal::unix::{SignalKind, signal};
use tokio::task::JoinHandle;

use crate::state::RunState;

/// Registers the handlers and spawns the task forwarding deliveries to `run`.
///
/// Must be called from within a tokio runtime. Repeated termination signals
/// are idempotent: shutdown always goes through the final refresh, publish,
/// and sink teardown.
pub fn spawn_listener(run: Arc<RunState>) -> Result<JoinHandle<()>> {
    let mut sigint = signal(SignalKind::interrupt()).context("register SIGINT handler")?;
    let mut sigterm = signal(SignalKind::terminate()).context("register SIGTERM handler")?;
    let mut sigusr1 =
        signal(SignalKind::user_defined1()).context("register SIGUSR1 handler")?;

    Ok(tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = sigint.recv() => terminate(&run, "SIGINT"),
                _ = sigterm.recv() => terminate(&run, "SIGTERM"),
                _ = sigusr1.recv() => {
                    tracing::info!("SIGUSR1 received, refreshing slow modules");
                    run.request_refresh();
                }
            }
        }
    }))
}

fn terminate(run: &RunState, name: &str) {
    if run.is_done() {
        tracing::info!("{name} received, shutdown already in progress");
    } else {
        tracing::info!("{name} received, shutting down");
    }
    run.request_terminate();
}
