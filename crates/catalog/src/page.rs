//! Pagination over an already-filtered list.
//!
//! Pages are 1-based. Every function here clamps instead of failing, so
//! any requested page (0, past the end) yields a valid, possibly empty,
//! slice.

/// Total number of pages for `len` items at `per_page` per page.
///
/// Never below 1: an empty list still has one (empty) page. A `per_page`
/// of 0 is treated as 1.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(per_page.max(1))
    }
}

/// Clamp a requested 1-based page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// The slice of `items` for the requested page.
///
/// The page is clamped first; the returned slice holds at most `per_page`
/// items and is empty when the offset reaches the item count.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let page = clamp_page(page, total_pages(items.len(), per_page));

    let start = (page - 1) * per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}
