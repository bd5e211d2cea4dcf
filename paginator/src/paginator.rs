use alloc::sync::Arc;
use core::cell::Cell;

use crate::types::compute_bias;
use crate::{BiasAdvisory, PageRequest, PageWindow, PaginatorOptions, PaginatorState, slice};

/// A headless pagination window.
///
/// This type is intentionally UI- and transport-agnostic:
/// - It does not hold item data and never invokes a fetch.
/// - Your adapter drives it by calling [`Paginator::advance`] from its own
///   trigger (a "load more" button, a viewport-intersection signal).
/// - Rendering is capped by [`Paginator::display_limit`]; apply it to the
///   fetched items with [`crate::slice`] or the `visible`/`deferred`
///   convenience methods.
///
/// The derived values are recomputed on every access from a single counter:
///
/// - `offset = requested_page * page_size + bias`
/// - `display_limit = requested_page * page_size`
///
/// `bias` accounts for items already in hand before pagination began, so the
/// next fetch lines up with what is displayed instead of refetching it.
///
/// Pages are assumed uniform: every fulfilled fetch is expected to contain
/// exactly `page_size` items (a short batch only to signal the end of the
/// data). If batches vary in size, `offset` drifts away from the true item
/// count; keeping them aligned is the caller's contract, not something this
/// type detects or repairs.
///
/// For buffer and fetch-lifecycle helpers, see the `paginator-adapter` crate.
#[derive(Clone, Debug)]
pub struct Paginator {
    options: PaginatorOptions,
    requested_page: u64,
    /// Resolved once in `new`; the floor `requested_page` never goes below.
    initial_page: u64,
    /// Fixed at construction; never changes as pages advance. Recomputed only
    /// when `page_size`/`initial_item_count` themselves are replaced.
    bias: usize,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Paginator {
    /// Creates a new paginator from options.
    ///
    /// Resolves `options.initial_page` (a `Provider` is called exactly once)
    /// and computes `bias = max(0, initial_item_count - page_size)`. When the
    /// bias is neither `0` nor exactly `page_size`, the advisory fires; see
    /// [`BiasAdvisory`].
    pub fn new(options: PaginatorOptions) -> Self {
        debug_assert!(options.page_size > 0, "page_size must be positive");
        let requested_page = options.initial_page.resolve();
        let bias = compute_bias(options.page_size, options.initial_item_count);
        pdebug!(
            page_size = options.page_size,
            initial_item_count = options.initial_item_count,
            requested_page,
            bias,
            "Paginator::new"
        );
        let p = Self {
            options,
            requested_page,
            initial_page: requested_page,
            bias,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        p.emit_advisory();
        p
    }

    /// Creates a paginator that resumes from a previously captured snapshot.
    ///
    /// The restored page is clamped to at least the resolved initial page, so
    /// `requested_page >= initial_page` holds for stale or default snapshots
    /// too. Live paginators are never restored in place; reconstruction is
    /// the only way back into an old session.
    pub fn from_state(options: PaginatorOptions, state: PaginatorState) -> Self {
        let mut p = Self::new(options);
        p.requested_page = p.requested_page.max(state.requested_page);
        p
    }

    pub fn options(&self) -> &PaginatorOptions {
        &self.options
    }

    /// Replaces the options.
    ///
    /// When `page_size` or `initial_item_count` differ from the current
    /// values, `bias` is recomputed and the advisory check reruns. The page
    /// counter is untouched, and `initial_page` in the new options is not
    /// re-resolved: the counter and its floor are fixed at construction.
    pub fn set_options(&mut self, options: PaginatorOptions) {
        debug_assert!(options.page_size > 0, "page_size must be positive");
        let geometry_changed = options.page_size != self.options.page_size
            || options.initial_item_count != self.options.initial_item_count;
        self.options = options;
        ptrace!(
            page_size = self.options.page_size,
            initial_item_count = self.options.initial_item_count,
            "Paginator::set_options"
        );
        if geometry_changed {
            self.bias = compute_bias(self.options.page_size, self.options.initial_item_count);
            self.emit_advisory();
        }
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to
    /// [`Paginator::set_options`].
    pub fn update_options(&mut self, f: impl FnOnce(&mut PaginatorOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Paginator) + Send + Sync + 'static>,
    ) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_on_advisory(
        &mut self,
        on_advisory: Option<impl Fn(&BiasAdvisory) + Send + Sync + 'static>,
    ) {
        self.options.on_advisory = on_advisory.map(|f| Arc::new(f) as _);
        self.notify();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        debug_assert!(page_size > 0, "page_size must be positive");
        if self.options.page_size == page_size {
            return;
        }
        self.options.page_size = page_size;
        self.bias = compute_bias(page_size, self.options.initial_item_count);
        self.emit_advisory();
        self.notify();
    }

    pub fn set_initial_item_count(&mut self, initial_item_count: usize) {
        if self.options.initial_item_count == initial_item_count {
            return;
        }
        self.options.initial_item_count = initial_item_count;
        self.bias = compute_bias(self.options.page_size, initial_item_count);
        self.emit_advisory();
        self.notify();
    }

    /// Requests the next page.
    ///
    /// Increments `requested_page` by exactly 1 and returns the fetch request
    /// for the newly uncovered span. There is no upper bound: advancing past
    /// the end of the available data is the caller's concern (the fetch comes
    /// back short or empty, and the caller stops advancing).
    pub fn advance(&mut self) -> PageRequest {
        self.requested_page = self.requested_page.saturating_add(1);
        ptrace!(requested_page = self.requested_page, "Paginator::advance");
        self.notify();
        self.page_request()
    }

    pub fn requested_page(&self) -> u64 {
        self.requested_page
    }

    pub fn initial_page(&self) -> u64 {
        self.initial_page
    }

    pub fn page_size(&self) -> usize {
        self.options.page_size
    }

    pub fn initial_item_count(&self) -> usize {
        self.options.initial_item_count
    }

    /// The one-time offset correction for items that were already in hand at
    /// construction: `max(0, initial_item_count - page_size)`.
    pub fn bias(&self) -> usize {
        self.bias
    }

    /// The cursor the next fetch should start from:
    /// `requested_page * page_size + bias` (saturating).
    pub fn offset(&self) -> u64 {
        self.requested_page
            .saturating_mul(self.options.page_size as u64)
            .saturating_add(self.bias as u64)
    }

    /// The maximum number of already-fetched items the UI may render:
    /// `requested_page * page_size`, saturating at `usize::MAX`.
    ///
    /// Independent of how many items have actually been fetched; apply it
    /// with [`crate::slice::visible`].
    pub fn display_limit(&self) -> usize {
        let limit = self
            .requested_page
            .saturating_mul(self.options.page_size as u64);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }

    /// The fetch request covering the span after what is currently displayed.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            offset: self.offset(),
            page_size: self.options.page_size,
        }
    }

    /// A combined snapshot of the derived values.
    pub fn window(&self) -> PageWindow {
        PageWindow {
            requested_page: self.requested_page,
            offset: self.offset(),
            display_limit: self.display_limit(),
        }
    }

    /// Returns the advisory for the current geometry, if any.
    ///
    /// Present exactly when `bias` is neither `0` nor `page_size`. The same
    /// check is available without a paginator via [`BiasAdvisory::check`].
    pub fn bias_advisory(&self) -> Option<BiasAdvisory> {
        BiasAdvisory::check(self.options.page_size, self.options.initial_item_count)
    }

    /// Returns a snapshot of pagination progress for session restore.
    pub fn state(&self) -> PaginatorState {
        PaginatorState {
            requested_page: self.requested_page,
        }
    }

    /// The prefix of `items` the UI should render right now.
    ///
    /// Equivalent to `slice::visible(items, self.display_limit())`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        slice::visible(items, self.display_limit())
    }

    /// The suffix of `items` fetched ahead of the display limit.
    pub fn deferred<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        slice::deferred(items, self.display_limit())
    }

    /// Splits `items` into the visible prefix and the deferred suffix.
    pub fn split<'a, T>(&self, items: &'a [T]) -> (&'a [T], &'a [T]) {
        slice::split(items, self.display_limit())
    }

    fn emit_advisory(&self) {
        let Some(advisory) = self.bias_advisory() else {
            return;
        };
        pwarn!(
            bias = advisory.bias,
            page_size = advisory.page_size,
            initial_item_count = advisory.initial_item_count,
            "initial item count is not a whole multiple of page_size; fetched pages will overlap or gap with displayed items"
        );
        if let Some(cb) = &self.options.on_advisory {
            cb(&advisory);
        }
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    ///
    /// Recommended when `on_change` drives rendering and you update several
    /// knobs at once (e.g. a page-size change followed by an advance).
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }
}
