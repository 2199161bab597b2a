//! Observable async state for the product collection.
//!
//! The container guarantees that at most one in-flight fetch is "current":
//! every fetch takes a monotonically increasing ticket and only the latest
//! ticket's completion is applied, so an older response that arrives late
//! can never overwrite newer data.

use std::sync::Arc;

use tokio::sync::Mutex;

use stockroom_core::{Product, StockEntry, StoreResult};

/// Handle identifying one fetch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
}

/// An optimistic local mutation awaiting server confirmation.
///
/// Applied to the snapshot immediately; the next authoritative list result
/// replaces the snapshot wholesale and clears the pending set, confirming
/// or rolling the change back in one reconcile step.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    /// Product removed locally, delete sent to the server.
    Delete(i64),
    /// Stock sequence replaced locally, patch sent to the server.
    ReplaceStocks { id: i64, stocks: Vec<StockEntry> },
}

impl PendingChange {
    fn apply(&self, products: &mut Vec<Product>) {
        match self {
            PendingChange::Delete(id) => products.retain(|p| p.id != *id),
            PendingChange::ReplaceStocks { id, stocks } => {
                if let Some(product) = products.iter_mut().find(|p| p.id == *id) {
                    product.stocks = stocks.clone();
                }
            }
        }
    }
}

/// What a consumer sees when it reads the container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
    /// Last-known collection; `None` until the first successful fetch.
    pub data: Option<Vec<Product>>,
    /// A fetch is in flight.
    pub loading: bool,
    /// Rendered message of the last failed fetch, cleared when a new
    /// attempt starts.
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Inner {
    data: Option<Vec<Product>>,
    loading: bool,
    error: Option<String>,
    next_seq: u64,
    current_seq: Option<u64>,
    pending: Vec<PendingChange>,
}

/// Shared `{data, loading, error}` cell for the product collection.
#[derive(Debug, Clone, Default)]
pub struct ProductsState {
    inner: Arc<Mutex<Inner>>,
}

impl ProductsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch attempt: sets `loading`, clears `error` and returns
    /// the ticket the completion must present. Issuing a new ticket
    /// supersedes every earlier one.
    pub async fn begin_fetch(&self) -> FetchTicket {
        let mut inner = self.inner.lock().await;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.current_seq = Some(seq);
        inner.loading = true;
        inner.error = None;
        FetchTicket { seq }
    }

    /// Complete a fetch attempt. Returns `true` when the result was
    /// applied, `false` when it was discarded as stale.
    ///
    /// A successful result becomes the authoritative snapshot and clears
    /// the pending optimistic changes. A failure keeps the last-known data
    /// in place and records the error message.
    pub async fn complete(&self, ticket: FetchTicket, result: StoreResult<Vec<Product>>) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.current_seq != Some(ticket.seq) {
            tracing::warn!(seq = ticket.seq, "discarding stale fetch result");
            return false;
        }
        inner.current_seq = None;
        inner.loading = false;
        match result {
            Ok(products) => {
                inner.data = Some(products);
                inner.pending.clear();
                inner.error = None;
            }
            Err(e) => {
                inner.error = Some(e.to_string());
            }
        }
        true
    }

    /// Apply an optimistic mutation to the local snapshot and remember it
    /// as pending until the next authoritative refresh.
    pub async fn apply_optimistic(&self, change: PendingChange) {
        let mut inner = self.inner.lock().await;
        if let Some(data) = inner.data.as_mut() {
            change.apply(data);
        }
        inner.pending.push(change);
    }

    /// Number of optimistic changes not yet reconciled.
    pub async fn pending_changes(&self) -> usize {
        self.inner.lock().await.pending.len()
    }

    /// Clone out the current view.
    pub async fn snapshot(&self) -> StateSnapshot {
        let inner = self.inner.lock().await;
        StateSnapshot {
            data: inner.data.clone(),
            loading: inner.loading,
            error: inner.error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{Location, StoreError};

    fn product(id: i64, quantity: u64) -> Product {
        Product {
            id,
            name: format!("Produit {id}"),
            category: "Divers".to_string(),
            barcode: "1234567890123".to_string(),
            price: 10.0,
            discount_price: None,
            supplier: "Fournisseur".to_string(),
            image_url: None,
            stocks: vec![StockEntry {
                id: 1,
                name: "Main".to_string(),
                quantity,
                location: Location {
                    city: "Paris".to_string(),
                    latitude: 0.0,
                    longitude: 0.0,
                },
            }],
            edit_history: vec![],
        }
    }

    #[tokio::test]
    async fn begin_fetch_sets_loading_and_clears_error() {
        let state = ProductsState::new();
        let t1 = state.begin_fetch().await;
        state
            .complete(t1, Err(StoreError::network("down")))
            .await;
        assert!(state.snapshot().await.error.is_some());

        let _t2 = state.begin_fetch().await;
        let snap = state.snapshot().await;
        assert!(snap.loading);
        assert!(snap.error.is_none());
    }

    #[tokio::test]
    async fn stale_completion_is_discarded() {
        let state = ProductsState::new();
        let t1 = state.begin_fetch().await;
        let t2 = state.begin_fetch().await;

        // #2 lands first, then #1 arrives late.
        assert!(state.complete(t2, Ok(vec![product(2, 1)])).await);
        assert!(!state.complete(t1, Ok(vec![product(1, 1)])).await);

        let snap = state.snapshot().await;
        assert_eq!(snap.data.unwrap()[0].id, 2);
        assert!(!snap.loading);
    }

    #[tokio::test]
    async fn failure_keeps_last_known_data() {
        let state = ProductsState::new();
        let t1 = state.begin_fetch().await;
        state.complete(t1, Ok(vec![product(1, 5)])).await;

        let t2 = state.begin_fetch().await;
        state
            .complete(t2, Err(StoreError::server(500, "boom")))
            .await;

        let snap = state.snapshot().await;
        assert_eq!(snap.data.unwrap().len(), 1);
        assert!(snap.error.unwrap().contains("500"));
    }

    #[tokio::test]
    async fn optimistic_delete_is_visible_immediately() {
        let state = ProductsState::new();
        let t = state.begin_fetch().await;
        state
            .complete(t, Ok(vec![product(1, 5), product(2, 3)]))
            .await;

        state.apply_optimistic(PendingChange::Delete(1)).await;

        let snap = state.snapshot().await;
        let remaining = snap.data.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        assert_eq!(state.pending_changes().await, 1);
    }

    #[tokio::test]
    async fn authoritative_refresh_clears_pending_changes() {
        let state = ProductsState::new();
        let t = state.begin_fetch().await;
        state.complete(t, Ok(vec![product(1, 5)])).await;
        state.apply_optimistic(PendingChange::Delete(1)).await;

        // Server truth still contains the product: the optimistic removal
        // rolls back on reconcile.
        let t = state.begin_fetch().await;
        state.complete(t, Ok(vec![product(1, 5)])).await;

        assert_eq!(state.pending_changes().await, 0);
        assert_eq!(state.snapshot().await.data.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn optimistic_stock_replacement_updates_the_snapshot() {
        let state = ProductsState::new();
        let t = state.begin_fetch().await;
        state.complete(t, Ok(vec![product(1, 5)])).await;

        state
            .apply_optimistic(PendingChange::ReplaceStocks {
                id: 1,
                stocks: vec![],
            })
            .await;

        let snap = state.snapshot().await;
        assert!(snap.data.unwrap()[0].stocks.is_empty());
    }
}
