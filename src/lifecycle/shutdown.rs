//! Shutdown coordination.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
///
/// Provides a broadcast channel that long-running tasks subscribe to, plus
/// a one-shot latch guarding the finalize sequence: the close-and-exit
/// steps run exactly once no matter which trigger fires first.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,

    /// One-shot finalize latch.
    finalized: AtomicBool,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            finalized: AtomicBool::new(false),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Claim the finalize step.
    ///
    /// Returns true for exactly one caller; every later call observes the
    /// latch and must skip the close sequence.
    pub fn begin_finalize(&self) -> bool {
        !self.finalized.swap(true, Ordering::SeqCst)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_wakes_subscriber() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        shutdown.trigger();
        assert!(rx.recv().await.is_ok());
    }

    #[test]
    fn test_finalize_latch_claims_once() {
        let shutdown = Shutdown::new();
        assert!(shutdown.begin_finalize());
        assert!(!shutdown.begin_finalize());
        assert!(!shutdown.begin_finalize());
    }

    #[test]
    fn test_trigger_without_subscribers_is_harmless() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        shutdown.trigger();
    }
}
