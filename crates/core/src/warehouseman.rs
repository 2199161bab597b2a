//! Warehouseman records served by `GET /warehousemans`.
//!
//! The login flow itself is an external collaborator; the record shape and
//! the secret lookup live here because statistics views are gated behind it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouseman {
    pub id: i64,
    pub name: String,
    #[serde(rename = "secretKey")]
    pub secret_key: String,
    #[serde(rename = "warehouseId")]
    pub warehouse_id: i64,
    pub localisation: String,
}

impl Warehouseman {
    /// Find the holder of a submitted secret, if any. Exact match against
    /// the plaintext list the backend serves.
    pub fn find_by_secret<'a>(all: &'a [Warehouseman], secret: &str) -> Option<&'a Warehouseman> {
        all.iter().find(|w| w.secret_key == secret)
    }
}
