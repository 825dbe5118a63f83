//! Stop signal shared by the dev server and its signal watcher.

use tokio::sync::broadcast;

/// One-shot stop signal for the dev server.
///
/// `HttpServer::run` holds a receiver and begins draining when the signal
/// fires. Tests fire it directly to stop a server they started.
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver to hand to [`crate::HttpServer::run`].
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every running server to stop. Returns how many were listening.
    pub fn trigger(&self, reason: &'static str) -> usize {
        let listeners = self.tx.send(()).unwrap_or(0);
        tracing::info!(reason, listeners, "Shutdown triggered");
        listeners
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
