//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains the **pure domain** records shared by the query and
//! aggregation engines and the remote store client (no infrastructure
//! concerns). Struct fields are serde-renamed to the exact wire shape of the
//! consumed REST resource.

pub mod error;
pub mod product;
pub mod validation;
pub mod warehouseman;

pub use error::{StoreError, StoreResult};
pub use product::{EditRecord, Location, Product, ProductDraft, Statistics, StockEntry};
pub use validation::{validate_draft, FieldIssue, ValidationReport};
pub use warehouseman::Warehouseman;
