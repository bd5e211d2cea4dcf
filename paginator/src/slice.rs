//! Prefix views over the fetched items of a list.
//!
//! The paginator tells a UI how many items it may render
//! ([`crate::Paginator::display_limit`]); these functions apply that cap to a
//! caller-owned slice. Everything here is pure and order-preserving: no
//! allocation, no mutation, no side effects. Items fetched ahead of the limit
//! are simply deferred until the next advance reveals them.
//!
//! Under-fetch is tolerated silently: when fewer items than the limit are in
//! hand, the visible prefix is just whatever is there.

use alloc::vec::Vec;
use core::cmp;

/// Returns the prefix of `items` the UI should render right now.
///
/// The result has length `min(items.len(), display_limit)`. A limit of 0
/// yields an empty slice.
pub fn visible<T>(items: &[T], display_limit: usize) -> &[T] {
    &items[..cmp::min(items.len(), display_limit)]
}

/// Returns the suffix of `items` fetched ahead of the display limit.
///
/// These are the items eager prefetching already has in hand but the UI must
/// not show yet.
pub fn deferred<T>(items: &[T], display_limit: usize) -> &[T] {
    &items[cmp::min(items.len(), display_limit)..]
}

/// Splits `items` into the visible prefix and the deferred suffix.
pub fn split<T>(items: &[T], display_limit: usize) -> (&[T], &[T]) {
    items.split_at(cmp::min(items.len(), display_limit))
}

/// Calls `f(index, item)` for each visible item, without allocating.
pub fn for_each_visible<T>(items: &[T], display_limit: usize, mut f: impl FnMut(usize, &T)) {
    for (index, item) in visible(items, display_limit).iter().enumerate() {
        f(index, item);
    }
}

/// Clones the visible items into `out` (clears `out` first).
///
/// Convenience wrapper around [`visible`] for adapters that keep a scratch
/// buffer of render units.
pub fn collect_visible<T: Clone>(items: &[T], display_limit: usize, out: &mut Vec<T>) {
    out.clear();
    out.extend_from_slice(visible(items, display_limit));
}
