//! `storefront-client`
//!
//! **Responsibility:** the product fetcher. A thin reqwest client over the
//! remote product API: one request per call, no retries, no caching. Maps
//! wire records into domain products (`thumbnail` becomes `image`) and
//! propagates failures to the caller unmodified.

mod client;
mod wire;

pub use client::{BASE_URL_ENV, CatalogClient, DEFAULT_BASE_URL};
