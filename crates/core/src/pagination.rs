//! Page window arithmetic
//!
//! Pure functions for turning a 1-indexed `(page, limit)` pair into slice bounds
//! over an already filtered and sorted selection, plus the lenient parsing the
//! transports use to turn raw query values into a valid pair.

use std::ops::Range;

/// Page used when the caller supplies none, or an unusable one
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the caller supplies none, or an unusable one
pub const DEFAULT_LIMIT: usize = 5;

/// Compute the slice bounds of `page` over `total` items
///
/// Returns `None` when `page` or `limit` is zero. A page starting past the end
/// of the selection yields an empty range rather than an error, and the last
/// page is clamped to `total`.
pub fn window(total: usize, page: usize, limit: usize) -> Option<Range<usize>> {
    if page == 0 || limit == 0 {
        return None;
    }

    let start = (page - 1).saturating_mul(limit);
    if start >= total {
        return Some(total..total);
    }

    let end = start.saturating_add(limit).min(total);
    Some(start..end)
}

/// Number of pages needed to show `total` items, `limit` at a time
pub fn total_pages(total: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit)
}

/// Parse a raw page or limit value, falling back to `default`
///
/// Missing, non-numeric and values below 1 all resolve to `default`.
pub fn parse_or_default(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| *value >= 1)
        .unwrap_or(default)
}
