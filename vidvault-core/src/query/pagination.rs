//! Fixed-size page slicing for collection responses.

use std::num::NonZeroUsize;

/// One page of a result sequence plus the metadata sent as response headers.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub max_pages: usize,
    pub total: usize,
}

/// Clamps a client-supplied page number to the 1-based range.
///
/// Zero and negative pages are served as page 1.
pub fn normalize_page(raw: i64) -> usize {
    if raw < 1 {
        1
    } else {
        usize::try_from(raw).unwrap_or(usize::MAX)
    }
}

/// `ceil(total / size)`.
pub fn max_pages(total: usize, size: NonZeroUsize) -> usize {
    total.div_ceil(size.get())
}

/// Slices `items` to `[(page - 1) * size, page * size)`, clipped to the
/// sequence length. A page past the end is empty rather than an error.
pub fn paginate<T>(items: Vec<T>, page: usize, size: NonZeroUsize) -> Page<T> {
    let page = page.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(size.get());
    let items = if start >= total {
        Vec::new()
    } else {
        items.into_iter().skip(start).take(size.get()).collect()
    };

    Page {
        items,
        current_page: page,
        max_pages: max_pages(total, size),
        total,
    }
}
