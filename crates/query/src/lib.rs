//! `stockroom-query`
//!
//! **Responsibility:** the pure query engine over an in-memory product
//! snapshot: sort, city filter and keyword search, composed into the
//! listing pipeline (city filter → keyword search → sort).
//!
//! Every function here is deterministic, allocates a fresh result and never
//! mutates its input, so concurrent readers over the same snapshot need no
//! coordination.

pub mod params;
pub mod pipeline;

pub use params::{QueryParams, SearchField, SortCriterion, SortOrder};
pub use pipeline::{filter_by_city, search_products, sort_products};
