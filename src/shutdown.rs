//! Kill-switch plumbing: terminate requests and the exit supervisor.
//!
//! Request handlers never call process-exit themselves. The admin handler
//! sends a terminate request over a channel, and the supervisor task spawned
//! at startup performs the actual exit after a short delay. The delay keeps
//! the ordering guarantee: the 200 response is flushed to the client before
//! the process dies. Tests hold the receiver instead of spawning the
//! supervisor, so an authorized kill is observable without killing anything.

use tokio::sync::mpsc;

use crate::config::{EXIT_FLUSH_DELAY, KILL_EXIT_CODE};

/// Sending half of the terminate-request channel, cloned into handler state.
#[derive(Clone, Debug)]
pub struct ShutdownHandle {
    tx: mpsc::Sender<()>,
}

impl ShutdownHandle {
    /// Create a handle and its paired receiver.
    pub fn new() -> (Self, mpsc::Receiver<()>) {
        // Capacity 1: one pending terminate request is all that can matter.
        let (tx, rx) = mpsc::channel(1);
        (Self { tx }, rx)
    }

    /// Request process termination.
    ///
    /// A request on an already-signalled channel is dropped silently; the
    /// first one wins and the process is going down either way.
    pub fn request_terminate(&self) {
        if self.tx.try_send(()).is_err() {
            tracing::debug!("Terminate already requested, ignoring duplicate");
        }
    }
}

/// Spawn the task that acts on terminate requests.
///
/// On the first request it waits [`EXIT_FLUSH_DELAY`] for the in-flight
/// response to reach the client, then exits with [`KILL_EXIT_CODE`]. The
/// non-zero status makes an external supervisor treat the stop as a crash
/// and restart the service.
pub fn spawn_exit_supervisor(mut rx: mpsc::Receiver<()>) {
    tokio::spawn(async move {
        if rx.recv().await.is_none() {
            // All senders dropped without a kill request; nothing to do.
            return;
        }

        tracing::warn!(
            exit_code = KILL_EXIT_CODE,
            "Terminate requested via admin endpoint, exiting shortly"
        );
        tokio::time::sleep(EXIT_FLUSH_DELAY).await;
        std::process::exit(KILL_EXIT_CODE);
    });
}
