//! Pagination over ordered sequences.
//!
//! All catalog queries return a [`PageEnvelope`]: one page of results plus
//! the total match count, so the UI can size its pagination controls without
//! a second query.

use serde::{Deserialize, Serialize};

/// Page size used by every paginated catalog query.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// One page of results plus the total number of matches.
///
/// Invariant: `results.len() == min(page_size, count - (page-1)*page_size)`
/// (clamped at zero); `count` always reflects the full filtered set, not the
/// returned page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub results: Vec<T>,
    pub count: usize,
}

impl<T> PageEnvelope<T> {
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }
}

/// Slice `items` into the requested page.
///
/// Pages are 1-based. An out-of-range `page` is NOT an error: it returns
/// empty `results` with the true `count` so callers degrade gracefully
/// instead of failing. `page == 0` is treated as page 1 under the same
/// permissive policy.
///
/// The returned page owns copies of the selected elements; callers can never
/// mutate the canonical dataset through a result.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> PageEnvelope<T> {
    let start_index = page.saturating_sub(1).saturating_mul(page_size);

    let results = if start_index >= items.len() {
        Vec::new()
    } else {
        let end = start_index.saturating_add(page_size).min(items.len());
        items[start_index..end].to_vec()
    };

    PageEnvelope {
        results,
        count: items.len(),
    }
}
