use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A warehouse location. Value object: identified by city name only, no
/// coordinate-uniqueness invariant is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Inventory of one product at one warehouse.
///
/// `id` is unique within the parent product's stock list, not globally.
/// Quantity is unsigned; callers clamp decrements at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub id: i64,
    pub name: String,
    pub quantity: u64,
    #[serde(rename = "localisation")]
    pub location: Location,
}

/// One entry of a product's edit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditRecord {
    #[serde(rename = "warehousemanId")]
    pub editor_id: i64,
    pub at: DateTime<Utc>,
}

/// A sellable item with zero or more stock entries.
///
/// `stocks` may be empty (a product with no current stock). The total
/// quantity is always recomputed from the entries via [`Product::stock_total`],
/// never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub barcode: String,
    pub price: f64,
    #[serde(rename = "solde", skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    pub supplier: String,
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stocks: Vec<StockEntry>,
    #[serde(rename = "editedBy", default)]
    pub edit_history: Vec<EditRecord>,
}

impl Product {
    /// Sum of quantities across this product's stock entries.
    ///
    /// Single source of truth for the total: the quantity sort, the
    /// out-of-stock derivation and any display logic all go through here.
    pub fn stock_total(&self) -> u64 {
        self.stocks.iter().map(|s| s.quantity).sum()
    }

    /// A product is out of stock when its entries sum to zero, including
    /// the empty-stocks case.
    pub fn is_out_of_stock(&self) -> bool {
        self.stock_total() == 0
    }
}

/// Creation payload: a product without an `id` (the server assigns one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub barcode: String,
    pub price: f64,
    #[serde(rename = "solde", skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<f64>,
    pub supplier: String,
    #[serde(rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub stocks: Vec<StockEntry>,
    #[serde(rename = "editedBy", default)]
    pub edit_history: Vec<EditRecord>,
}

/// Derived aggregate counts over a product collection snapshot.
///
/// Computed fresh on demand, never persisted. `total_stock_value` is a raw
/// unit count summed across all stocks, not a monetary value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(rename = "totalProducts")]
    pub total_products: u64,
    #[serde(rename = "totalCities")]
    pub total_cities: u64,
    #[serde(rename = "outOfStock")]
    pub out_of_stock: u64,
    #[serde(rename = "totalStockValue")]
    pub total_stock_value: u64,
}
