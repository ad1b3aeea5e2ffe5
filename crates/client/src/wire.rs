//! Wire-format records for the remote product API.

use serde::Deserialize;
use storefront_core::Product;

/// Envelope returned by `GET /products`.
///
/// The wire also carries `total`, `skip` and `limit`; only the product
/// list is consumed, so serde drops the rest.
#[derive(Debug, Deserialize)]
pub(crate) struct ProductListEnvelope {
    pub products: Vec<RawProduct>,
}

/// One product as the API serves it.
///
/// Identical to [`Product`] except the image URL arrives under
/// `thumbnail`. Every other field passes through by name.
#[derive(Debug, Deserialize)]
pub(crate) struct RawProduct {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    /// The live API omits this for some items.
    #[serde(default)]
    pub brand: String,
    pub category: String,
    pub stock: u32,
    pub rating: f64,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            price: raw.price,
            image: raw.thumbnail,
            brand: raw.brand,
            category: raw.category,
            stock: raw.stock,
            rating: raw.rating,
        }
    }
}
