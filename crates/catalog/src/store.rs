//! The catalog state store.
//!
//! The store is the only stateful component: it owns the fetched product
//! list, the loading/error flags, the search query, the current page and
//! the view mode. Search and pagination are recomputed from the current
//! state on every read, so derived views are never stale.

use storefront_core::{Product, ProductSource, ViewMode};

use crate::{page, search};

/// Products shown per page by default (a 3x3 grid).
pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// The catalog's entire mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Replaced wholesale on each successful fetch.
    pub items: Vec<Product>,
    /// True only while a fetch is in flight.
    pub loading: bool,
    /// Message of the last failed fetch; cleared when a new fetch starts.
    pub error: Option<String>,
    /// 1-based.
    pub current_page: usize,
    /// Fixed at construction, always at least 1.
    pub items_per_page: usize,
    pub view_mode: ViewMode,
    pub search_query: String,
}

impl CatalogState {
    fn new(items_per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            // A page size below 1 cannot be paginated.
            items_per_page: items_per_page.max(1),
            view_mode: ViewMode::default(),
            search_query: String::new(),
        }
    }
}

/// Owns the catalog state and the product source.
///
/// Every mutation goes through one of the actions below, and every action
/// takes `&mut self`, so mutations are serialized by construction. The
/// only await point is the source call inside [`fetch_items`]; an
/// in-flight fetch always runs to completion and writes its result
/// (last write wins).
///
/// [`fetch_items`]: CatalogStore::fetch_items
pub struct CatalogStore<S> {
    state: CatalogState,
    source: S,
}

impl<S: ProductSource> CatalogStore<S> {
    /// Create a store with the default page size.
    pub fn new(source: S) -> Self {
        Self::with_page_size(source, DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn with_page_size(source: S, items_per_page: usize) -> Self {
        Self {
            state: CatalogState::new(items_per_page),
            source,
        }
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Load the product list from the source.
    ///
    /// On success the previous items are replaced wholesale and the view
    /// returns to the first page. On failure the error's message lands in
    /// `state.error` and the previous items stay untouched.
    pub async fn fetch_items(&mut self) {
        self.state.loading = true;
        self.state.error = None;

        match self.source.fetch_products().await {
            Ok(items) => {
                tracing::debug!(count = items.len(), "product list refreshed");
                self.state.items = items;
                self.state.current_page = 1;
            }
            Err(err) => {
                tracing::warn!(error = %err, "product fetch failed");
                self.state.error = Some(err.to_string());
            }
        }

        self.state.loading = false;
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.state.view_mode = mode;
    }

    /// Update the search query.
    ///
    /// Always returns to the first page, even when the query text is
    /// unchanged or yields the same result set.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
        self.state.current_page = 1;
    }

    /// Move to `page`, clamped against the current number of pages.
    pub fn set_page(&mut self, page: usize) {
        let total = self.total_pages();
        self.state.current_page = page::clamp_page(page, total);
    }

    /// Items surviving the current search query, in fetch order.
    pub fn filtered_items(&self) -> Vec<Product> {
        search::filter(&self.state.items, &self.state.search_query)
    }

    /// The slice of filtered items for the current page.
    pub fn paginated_items(&self) -> Vec<Product> {
        let filtered = self.filtered_items();
        page::paginate(&filtered, self.state.current_page, self.state.items_per_page).to_vec()
    }

    /// Number of pages in the filtered list, never below 1.
    pub fn total_pages(&self) -> usize {
        page::total_pages(self.filtered_items().len(), self.state.items_per_page)
    }
}
