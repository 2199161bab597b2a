//! `stockroom-stats`
//!
//! **Responsibility:** derive collection-wide [`Statistics`] from a product
//! snapshot. Pure, single pass, never fails: malformed remote payloads
//! degrade to zero-valued statistics instead of erroring.

use std::collections::HashSet;

use serde_json::Value;

use stockroom_core::{Product, Statistics};

/// Aggregate a typed product collection.
///
/// - `total_products`: count of products.
/// - `total_stock_value`: raw sum of quantities across all stocks of all
///   products (a unit count, not money).
/// - `out_of_stock`: products whose own stock total is exactly zero,
///   including products with no stock entries at all.
/// - `total_cities`: distinct city names across all stock locations.
pub fn compute_statistics(products: &[Product]) -> Statistics {
    let mut stats = Statistics {
        total_products: products.len() as u64,
        ..Statistics::default()
    };
    let mut cities: HashSet<&str> = HashSet::new();

    for product in products {
        let product_total = product.stock_total();
        stats.total_stock_value += product_total;
        if product_total == 0 {
            stats.out_of_stock += 1;
        }
        for stock in &product.stocks {
            cities.insert(stock.location.city.as_str());
        }
    }

    stats.total_cities = cities.len() as u64;
    stats
}

/// Aggregate an untrusted JSON payload from the list endpoint.
///
/// Mirrors the tolerance the listing consumer needs from a remote it does
/// not control: a non-array payload counts as an empty collection, a
/// product whose `stocks` is not an array counts as having none, a missing
/// or non-numeric `quantity` counts as 0, and entries without a
/// `localisation.city` are skipped for the city set.
pub fn statistics_from_json(payload: &Value) -> Statistics {
    let Some(products) = payload.as_array() else {
        return Statistics::default();
    };

    let mut stats = Statistics {
        total_products: products.len() as u64,
        ..Statistics::default()
    };
    let mut cities: HashSet<&str> = HashSet::new();

    for product in products {
        let mut product_total = 0u64;
        if let Some(stocks) = product.get("stocks").and_then(Value::as_array) {
            for stock in stocks {
                let quantity = stock.get("quantity").and_then(Value::as_u64).unwrap_or(0);
                product_total += quantity;
                if let Some(city) = stock
                    .get("localisation")
                    .and_then(|l| l.get("city"))
                    .and_then(Value::as_str)
                {
                    cities.insert(city);
                }
            }
        }
        stats.total_stock_value += product_total;
        if product_total == 0 {
            stats.out_of_stock += 1;
        }
    }

    stats.total_cities = cities.len() as u64;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stockroom_core::{Location, StockEntry};

    fn stock(id: i64, city: &str, quantity: u64) -> StockEntry {
        StockEntry {
            id,
            name: format!("Stock {id}"),
            quantity,
            location: Location {
                city: city.to_string(),
                latitude: 0.0,
                longitude: 0.0,
            },
        }
    }

    fn product(id: i64, stocks: Vec<StockEntry>) -> Product {
        Product {
            id,
            name: format!("Produit {id}"),
            category: "Divers".to_string(),
            barcode: "1234567890123".to_string(),
            price: 10.0,
            discount_price: None,
            supplier: "Fournisseur".to_string(),
            image_url: None,
            stocks,
            edit_history: vec![],
        }
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        assert_eq!(compute_statistics(&[]), Statistics::default());
    }

    #[test]
    fn sums_counts_and_distinct_cities() {
        let products = vec![
            product(1, vec![stock(1, "Paris", 5), stock(2, "Lyon", 3)]),
            product(2, vec![stock(3, "Paris", 0)]),
            product(3, vec![]),
        ];

        let stats = compute_statistics(&products);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_stock_value, 8);
        assert_eq!(stats.total_cities, 2);
        // Product 2 sums to zero and product 3 has no entries: both count.
        assert_eq!(stats.out_of_stock, 2);
    }

    #[test]
    fn city_distinctness_is_case_sensitive_on_the_raw_name() {
        let products = vec![
            product(1, vec![stock(1, "Paris", 1)]),
            product(2, vec![stock(2, "paris", 1)]),
        ];
        assert_eq!(compute_statistics(&products).total_cities, 2);
    }

    #[test]
    fn non_array_payload_degrades_to_zero_stats() {
        assert_eq!(statistics_from_json(&json!({"error": "nope"})), Statistics::default());
        assert_eq!(statistics_from_json(&json!(null)), Statistics::default());
        assert_eq!(statistics_from_json(&json!("products")), Statistics::default());
    }

    #[test]
    fn malformed_entries_are_tolerated() {
        let payload = json!([
            { "id": 1, "stocks": [
                { "quantity": 4, "localisation": { "city": "Paris" } },
                { "localisation": { "city": "Lyon" } },
                { "quantity": 2 }
            ]},
            { "id": 2, "stocks": "not-an-array" },
            { "id": 3 }
        ]);

        let stats = statistics_from_json(&payload);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_stock_value, 6);
        assert_eq!(stats.total_cities, 2);
        assert_eq!(stats.out_of_stock, 2);
    }

    #[test]
    fn typed_and_untyped_paths_agree_on_well_formed_data() {
        let products = vec![
            product(1, vec![stock(1, "Paris", 5)]),
            product(2, vec![stock(2, "Lyon", 10)]),
        ];
        let payload = serde_json::to_value(&products).unwrap();
        assert_eq!(statistics_from_json(&payload), compute_statistics(&products));
    }
}
