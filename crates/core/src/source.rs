//! Seam between the state store and whatever produces products.

use core::future::Future;

use crate::error::FetchResult;
use crate::product::Product;

/// Anything that can produce products for the catalog.
///
/// The HTTP client is the production implementation; tests substitute
/// in-memory stubs. Implementations must not retry or return partial
/// results: one call, one outcome.
pub trait ProductSource {
    /// Fetch the full product list.
    fn fetch_products(&self) -> impl Future<Output = FetchResult<Vec<Product>>> + Send;

    /// Fetch a single product by identifier.
    fn fetch_product_by_id(&self, id: u64) -> impl Future<Output = FetchResult<Product>> + Send;
}
