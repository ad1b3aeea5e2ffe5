//! `storefront-core` — domain foundation for the catalog.
//!
//! This crate contains **pure domain** types: the product model, the view
//! mode, the fetch error model, and the [`ProductSource`] seam the state
//! store pulls products through. No IO, no runtime.

pub mod error;
pub mod product;
pub mod source;

pub use error::{FetchError, FetchResult};
pub use product::{Product, ViewMode};
pub use source::ProductSource;
