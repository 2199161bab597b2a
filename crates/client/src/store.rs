//! Typed HTTP calls against the product resource.

use serde::{Deserialize, Serialize};
use serde_json::json;

use stockroom_core::{Product, ProductDraft, StockEntry, StoreError, StoreResult, Warehouseman};

use crate::config::StoreConfig;

/// Body of the fire-and-forget `POST /statistics` side channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    #[serde(rename = "mostRemovedProducts")]
    pub most_removed_products: Vec<Product>,
}

/// Remote store adapter for the product resource.
///
/// Cheap to clone; the underlying `reqwest::Client` is a shared handle.
#[derive(Debug, Clone)]
pub struct ProductStore {
    http: reqwest::Client,
    base_url: String,
}

impl ProductStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    /// `GET /products` - the full collection snapshot.
    pub async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let resp = self
            .http
            .get(format!("{}/products", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp).await?).await
    }

    /// `GET /products/{id}`.
    pub async fn get_product(&self, id: i64) -> StoreResult<Product> {
        let resp = self
            .http
            .get(format!("{}/products/{id}", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp).await?).await
    }

    /// `POST /products` - the server assigns the id.
    pub async fn create_product(&self, draft: &ProductDraft) -> StoreResult<Product> {
        let resp = self
            .http
            .post(format!("{}/products", self.base_url))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp).await?).await
    }

    /// `PATCH /products/{id}` with `{"stocks": [...]}` - replace the stock
    /// sequence, leaving every other field alone.
    pub async fn update_product_stocks(
        &self,
        id: i64,
        stocks: &[StockEntry],
    ) -> StoreResult<Product> {
        let resp = self
            .http
            .patch(format!("{}/products/{id}", self.base_url))
            .json(&json!({ "stocks": stocks }))
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp).await?).await
    }

    /// `PUT /products/{id}` - full replace.
    pub async fn replace_product(&self, product: &Product) -> StoreResult<Product> {
        let resp = self
            .http
            .put(format!("{}/products/{}", self.base_url, product.id))
            .json(product)
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp).await?).await
    }

    /// `DELETE /products/{id}`.
    ///
    /// Idempotent from the client's point of view: deleting an id the
    /// server no longer knows is success, so a retried delete is silent.
    pub async fn delete_product(&self, id: i64) -> StoreResult<()> {
        let resp = self
            .http
            .delete(format!("{}/products/{id}", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        match check(resp).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                tracing::debug!(id, "delete of already-absent product treated as success");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// `POST /statistics` - analytics side channel. Fire and forget:
    /// failures are logged and never surfaced to the caller.
    pub async fn report_statistics(&self, report: &StatisticsReport) {
        let sent = self
            .http
            .post(format!("{}/statistics", self.base_url))
            .json(report)
            .send()
            .await;
        match sent {
            Ok(resp) if resp.status().is_success() => {}
            Ok(resp) => {
                tracing::warn!(status = resp.status().as_u16(), "statistics report rejected");
            }
            Err(e) => {
                tracing::warn!("statistics report failed to send: {e}");
            }
        }
    }

    /// `GET /warehousemans` - plaintext list consumed by the login
    /// collaborator.
    pub async fn list_warehousemans(&self) -> StoreResult<Vec<Warehouseman>> {
        let resp = self
            .http
            .get(format!("{}/warehousemans", self.base_url))
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp).await?).await
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::network(e.to_string())
}

/// Map a non-2xx response to the store error taxonomy.
async fn check(resp: reqwest::Response) -> StoreResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    Err(match status.as_u16() {
        404 => StoreError::NotFound,
        400 | 422 => StoreError::validation(message),
        code => StoreError::server(code, message),
    })
}

async fn decode<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> StoreResult<T> {
    resp.json().await.map_err(transport)
}
