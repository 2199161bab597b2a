//! Query parameters as explicit, immutable values.
//!
//! The criteria are closed enums matched exhaustively: an unrecognized sort
//! criterion or search field is unrepresentable, there is no silent no-op
//! branch for it.

use serde::{Deserialize, Serialize};

use stockroom_core::Product;

use crate::pipeline::{filter_by_city, search_products, sort_products};

/// Projection a product list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Numeric price.
    Price,
    /// Case-insensitive product name.
    Name,
    /// Total stock quantity summed over all entries.
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Field a keyword search matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    Name,
    #[serde(rename = "type")]
    Category,
    Price,
    Supplier,
}

/// One interactive listing's worth of query state.
///
/// Passed into the pipeline on every recomputation; there is no hidden
/// shared filter state anywhere in the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    /// City filter; `None` skips the stage entirely.
    pub city: Option<String>,
    /// Search keyword; `None` skips the stage. An empty keyword matches
    /// everything, so `Some(String::new())` is a no-op too.
    pub keyword: Option<String>,
    /// Field the keyword matches against.
    pub field: SearchField,
    /// Ordering, applied last.
    pub sort: Option<(SortCriterion, SortOrder)>,
}

impl QueryParams {
    /// Run the full pipeline: city filter → keyword search → sort.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut view: Vec<Product> = match &self.city {
            Some(city) => filter_by_city(products, city),
            None => products.to_vec(),
        };
        if let Some(keyword) = &self.keyword {
            view = search_products(&view, keyword, self.field);
        }
        if let Some((criterion, order)) = self.sort {
            view = sort_products(&view, criterion, order);
        }
        view
    }
}
