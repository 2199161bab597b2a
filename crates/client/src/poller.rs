//! Cancellable interval refresh of the product snapshot.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::state::ProductsState;
use crate::store::ProductStore;

/// Background task that re-fetches the product list on a fixed period.
///
/// Each tick takes a fetch ticket before calling the store, so a response
/// that arrives after a newer tick has started is discarded by the state
/// container's sequence guard. Shutdown clears the schedule; no in-flight
/// request is cancelled beyond discarding its result.
pub struct Poller {
    shutdown: Arc<Notify>,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the refresh loop. The first fetch fires immediately.
    pub fn spawn(store: ProductStore, state: ProductsState, period: Duration) -> Self {
        let shutdown = Arc::new(Notify::new());
        let shutdown_rx = shutdown.clone();

        let handle = tokio::spawn(async move {
            tracing::info!(period_ms = period.as_millis() as u64, "product poller started");

            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown_rx.notified() => {
                        tracing::info!("product poller received shutdown signal");
                        break;
                    }
                    _ = interval.tick() => {
                        let ticket = state.begin_fetch().await;
                        let result = store.list_products().await;
                        if let Err(e) = &result {
                            tracing::warn!("product list refresh failed: {e}");
                        }
                        state.complete(ticket, result).await;
                    }
                }
            }

            tracing::info!("product poller stopped");
        });

        Self { shutdown, handle }
    }

    /// Request shutdown without waiting for the task to finish.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }

    /// Request shutdown and wait for the loop to exit.
    pub async fn shutdown_and_wait(self) {
        self.shutdown.notify_one();
        if let Err(e) = self.handle.await {
            tracing::warn!("poller task did not shut down cleanly: {e}");
        }
    }

    /// True once the task has exited (after shutdown or a panic).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
