//! `stockroom-client`
//!
//! **Responsibility:** the remote store adapter over the product REST
//! resource.
//!
//! This crate provides:
//! - [`ProductStore`]: typed CRUD calls against the backend
//! - [`ProductsState`]: the observable `{data, loading, error}` container
//!   with a monotonic fetch-sequence guard and optimistic local mutations
//! - [`Poller`]: a cancellable interval task refreshing the snapshot
//!
//! The client never owns authoritative state - it holds a transient
//! snapshot that the next poll reconciles with server truth.

pub mod config;
pub mod poller;
pub mod state;
pub mod store;

pub use config::StoreConfig;
pub use poller::Poller;
pub use state::{FetchTicket, PendingChange, ProductsState, StateSnapshot};
pub use store::{ProductStore, StatisticsReport};
