//! `storefront-catalog`
//!
//! **Responsibility:** the one non-trivial data transformation of the app:
//! fetch → filter → paginate.
//!
//! This crate provides:
//! - Full-text search over the fetched product list (`search`)
//! - Bounds-clamped pagination (`page`)
//! - The catalog state store that composes both (`store`)
//!
//! `search` and `page` are pure functions; the store is the only stateful
//! component and owns all mutation.

pub mod page;
pub mod search;
pub mod store;

pub use store::{CatalogState, CatalogStore, DEFAULT_ITEMS_PER_PAGE};
