//! Cancellation token for abandoning a pending interpreter lookup.
//!
//! The selector races the discovery service's async lookup against this
//! token; when the host cancels (editor closed, user gave up waiting),
//! resolution falls back to the configured default interpreter instead of
//! blocking on the lookup.

use std::sync::Arc;
use tokio::sync::watch;

/// A token that signals cancellation of an in-flight operation.
///
/// Clones share state: cancelling any clone cancels them all. The token is
/// both pollable ([`is_cancelled`](Self::is_cancelled)) and awaitable
/// ([`cancelled`](Self::cancelled)), so it can sit on one side of a
/// `tokio::select!`.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    /// Creates a token in the non-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Request cancellation. Safe to call from any thread, and idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Check whether cancellation has been requested on this token or any
    /// of its clones.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Clear the flag so the token can be reused for another operation.
    pub fn reset(&self) {
        self.tx.send_replace(false);
    }

    /// Completes once cancellation is requested.
    ///
    /// Returns immediately if the token is already cancelled.
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            // The sender lives in self, so changed() cannot error here.
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}
