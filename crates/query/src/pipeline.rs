//! Sort, filter and search over a product snapshot.

use std::cmp::Ordering;

use stockroom_core::Product;

use crate::params::{SearchField, SortCriterion, SortOrder};

/// Return a new sequence ordered by `criterion`.
///
/// The sort is stable and `Descending` reverses the comparison, not the
/// result, so equal keys keep their relative input order either way.
pub fn sort_products(
    products: &[Product],
    criterion: SortCriterion,
    order: SortOrder,
) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| {
        let cmp = match criterion {
            SortCriterion::Price => a.price.total_cmp(&b.price),
            SortCriterion::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortCriterion::Quantity => a.stock_total().cmp(&b.stock_total()),
        };
        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });
    sorted
}

/// Keep products holding stock in `city`.
///
/// A product matches when any of its stock entries sits at a location whose
/// city equals `city` case-insensitively. Exact match after lowercasing: no
/// trimming, no substring. Callers skip this stage when no city is selected.
pub fn filter_by_city(products: &[Product], city: &str) -> Vec<Product> {
    let city = city.to_lowercase();
    products
        .iter()
        .filter(|p| p.stocks.iter().any(|s| s.location.city.to_lowercase() == city))
        .cloned()
        .collect()
}

/// Case-insensitive substring search on the selected field.
///
/// Price is matched against the decimal rendering of the number, so "10"
/// matches 10, 100 and 210 but not 10.5 unless the literal substring
/// appears. An empty keyword matches everything.
pub fn search_products(products: &[Product], keyword: &str, field: SearchField) -> Vec<Product> {
    let keyword = keyword.to_lowercase();
    products
        .iter()
        .filter(|p| match field {
            SearchField::Name => p.name.to_lowercase().contains(&keyword),
            SearchField::Category => p.category.to_lowercase().contains(&keyword),
            SearchField::Price => p.price.to_string().contains(&keyword),
            SearchField::Supplier => p.supplier.to_lowercase().contains(&keyword),
        })
        .cloned()
        .collect()
}
