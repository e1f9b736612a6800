//! HTTP client for the catalog backend.
//!
//! Wraps the four REST operations the product catalog exposes. Each call is a
//! single request against a fixed base URL with JSON bodies; there are no
//! retries and no caching, and any transport failure, HTTP error status, or
//! malformed response propagates to the caller as an error.

use anyhow::{anyhow, Context, Result};
use reqwest::{Client, Response};
use shared::{
    domain::{Product, ProductId},
    error::{ApiException, ErrorBody},
    protocol::ProductPage,
};
use tracing::debug;

/// Items per page the catalog UI requests.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Turns a non-2xx response into an error, keeping the backend's
/// `{"error": ...}` message when the body carries one.
async fn api_error(response: Response) -> anyhow::Error {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => anyhow::Error::new(ApiException::new(format!("{status}: {}", body.error))),
        Err(_) => anyhow!("request failed with status {status}"),
    }
}

pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_products(&self, page: u32, limit: u32) -> Result<ProductPage> {
        debug!(page, limit, "listing products");
        let response = self
            .http
            .get(format!("{}/products", self.base_url))
            .query(&[("page", page), ("limit", limit)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        let body: ProductPage = response
            .json()
            .await
            .context("failed to decode product page response")?;
        Ok(body)
    }

    /// Creates `draft` on the backend. The draft must not carry an id; the
    /// returned product does.
    pub async fn create_product(&self, draft: &Product) -> Result<Product> {
        debug!(name = %draft.name, "creating product");
        let response = self
            .http
            .post(format!("{}/products", self.base_url))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        let created: Product = response
            .json()
            .await
            .context("failed to decode created product response")?;
        Ok(created)
    }

    /// Replaces the product at `id` with the full `product` body.
    pub async fn update_product(&self, id: ProductId, product: &Product) -> Result<Product> {
        debug!(product_id = id.0, "updating product");
        let response = self
            .http
            .put(format!("{}/products/{}", self.base_url, id.0))
            .json(product)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        let updated: Product = response
            .json()
            .await
            .context("failed to decode updated product response")?;
        Ok(updated)
    }

    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        debug!(product_id = id.0, "deleting product");
        let response = self
            .http
            .delete(format!("{}/products/{}", self.base_url, id.0))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
