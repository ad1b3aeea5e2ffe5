//! HTTP client for the remote product API.

use storefront_core::{FetchError, FetchResult, Product, ProductSource};

use crate::wire::{ProductListEnvelope, RawProduct};

/// Base URL of the reference deployment.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Environment variable that overrides the base URL.
pub const BASE_URL_ENV: &str = "STOREFRONT_API_URL";

/// Thin client over the product API.
///
/// One outbound request per call; errors propagate to the caller as
/// [`FetchError`] with no retry and no partial result.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Build a client from `STOREFRONT_API_URL`, falling back to the
    /// reference deployment.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, path: &str) -> FetchResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "requesting");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::network(format!(
                "unexpected status {status} from {url}"
            )));
        }

        resp.json::<T>()
            .await
            .map_err(|e| FetchError::decode(e.to_string()))
    }
}

impl ProductSource for CatalogClient {
    /// `GET /products`, mapped into domain products.
    async fn fetch_products(&self) -> FetchResult<Vec<Product>> {
        let envelope: ProductListEnvelope = self.get_json("/products").await?;
        tracing::debug!(count = envelope.products.len(), "product list fetched");
        Ok(envelope.products.into_iter().map(Product::from).collect())
    }

    /// `GET /products/{id}`.
    async fn fetch_product_by_id(&self, id: u64) -> FetchResult<Product> {
        let raw: RawProduct = self.get_json(&format!("/products/{id}")).await?;
        Ok(raw.into())
    }
}
