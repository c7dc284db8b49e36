//! Fixed-height windowing arithmetic.
//!
//! These are pure functions of their arguments. The manager calls them on every
//! recomputation; adapters can call them directly to answer "what would be visible at
//! offset X" without touching manager state.

use crate::VisibleRange;

fn to_usize(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

/// Largest valid scroll offset on an axis with `total` content and a `viewport`-sized window.
pub fn max_scroll(total: u64, viewport: u32) -> u64 {
    total.saturating_sub(viewport as u64)
}

/// Clamps a raw host offset (possibly negative, e.g. during rubber-band overscroll) into
/// `[0, max]`.
pub fn clamp_offset(raw: i64, max: u64) -> u64 {
    u64::try_from(raw).map_or(0, |v| v.min(max))
}

/// Computes the overscanned, inclusive window for a fixed item height.
///
/// - `raw_start = floor(scroll_top / item_height)`
/// - `raw_end = ceil((scroll_top + container_height) / item_height) - 1`
/// - `start = max(0, raw_start - overscan)`, `end = min(item_count - 1, raw_end + overscan)`
///
/// `scroll_top` is expected to be clamped already; out-of-range values still yield a window
/// inside `[0, item_count - 1]`. Returns [`VisibleRange::EMPTY`] for an empty collection.
pub fn compute_window(
    scroll_top: u64,
    container_height: u32,
    item_height: u32,
    overscan: usize,
    item_count: usize,
) -> VisibleRange {
    if item_count == 0 || item_height == 0 {
        return VisibleRange::EMPTY;
    }

    let h = item_height as u64;
    let raw_start = scroll_top / h;
    let raw_end = scroll_top
        .saturating_add(container_height as u64)
        .div_ceil(h)
        .saturating_sub(1);

    let last = item_count - 1;
    let start = to_usize(raw_start).saturating_sub(overscan).min(last);
    let end = to_usize(raw_end)
        .saturating_add(overscan)
        .min(last)
        .max(start);
    VisibleRange::inclusive(start, end)
}

/// Pixel offset of the top edge of `index`. Independent of what is currently materialized.
pub fn item_top(index: usize, item_height: u32) -> u64 {
    (index as u64).saturating_mul(item_height as u64)
}

/// The row covering `offset`, or `None` when the collection is empty.
///
/// Offsets past the end resolve to the last row.
pub fn index_at_offset(offset: u64, item_height: u32, item_count: usize) -> Option<usize> {
    if item_count == 0 || item_height == 0 {
        return None;
    }
    Some(to_usize(offset / item_height as u64).min(item_count - 1))
}
