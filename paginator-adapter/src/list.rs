use alloc::vec::Vec;

use paginator::{InitialPage, PageRequest, Paginator, PaginatorOptions};

/// Fetch bookkeeping for an [`InfiniteList`]: at most one request is ever in
/// flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadState {
    /// No fetch in flight.
    Idle,
    /// The request handed out by [`InfiniteList::next_request`], awaiting
    /// [`InfiniteList::fulfill`] or [`InfiniteList::fail`].
    Pending(PageRequest),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

/// A framework-neutral controller that wraps a `paginator::Paginator` together
/// with the fetched-item buffer and mediates the load-more workflow.
///
/// This type does not hold any UI or transport objects. Adapters drive it by
/// calling:
/// - `next_request()` after construction and after every `fulfill`/`fail`/
///   `load_more`, running the returned fetch themselves
/// - `fulfill(batch)` / `fail()` when that fetch completes
/// - `load_more()` from the UI trigger (a button, an end-of-list sentinel);
///   when it returns `false` with a fetch outstanding, retry it on the next
///   `fulfill`
/// - `visible()` on every render
///
/// Fetches always start at the end of the buffer, so fulfilled items are
/// contiguous no matter how calls interleave, and `next_request` stops
/// handing out work once a full page is buffered beyond the display limit.
/// That keeps one page in hand ahead of what is shown: in the steady state a
/// `load_more` reveals items that are already present instead of showing a
/// loading skeleton, and the pager's `offset` equals the buffer length after
/// every fulfilled fetch.
///
/// Batches are expected to be whole pages (exactly `page_size` items, shorter
/// only at the end of the data).
#[derive(Clone, Debug)]
pub struct InfiniteList<T> {
    pager: Paginator,
    items: Vec<T>,
    load: LoadState,
    exhausted: bool,
}

impl<T> InfiniteList<T> {
    /// Creates a list with no items in hand.
    ///
    /// The pager starts at page 0 (nothing displayed), so the first fetch
    /// covers the first page and the first `load_more` reveals it.
    pub fn new(options: PaginatorOptions) -> Self {
        Self::with_items(options, Vec::new())
    }

    /// Creates a list seeded with already-fetched items (e.g. a server
    /// response delivered alongside the page).
    ///
    /// `initial_item_count` is derived from `items.len()`; the configured
    /// initial page (default 1) decides how much of the seed is displayed at
    /// once, the rest staying in hand for the first `load_more`. An empty
    /// seed behaves like [`InfiniteList::new`]. Like batches, seeds are
    /// expected to be whole pages; a shorter seed is still displayed in
    /// full, and the next fetch starts at its end.
    pub fn with_items(options: PaginatorOptions, items: Vec<T>) -> Self {
        let mut options = options;
        options.initial_item_count = items.len();
        if items.is_empty() {
            options.initial_page = InitialPage::Value(0);
        }
        Self {
            pager: Paginator::new(options),
            items,
            load: LoadState::Idle,
            exhausted: false,
        }
    }

    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Paginator {
        &mut self.pager
    }

    pub fn into_parts(self) -> (Paginator, Vec<T>) {
        (self.pager, self.items)
    }

    /// Every item fetched so far, including the ones not yet revealed.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The prefix of the buffer the UI should render right now.
    pub fn visible(&self) -> &[T] {
        self.pager.visible(&self.items)
    }

    /// The suffix of the buffer fetched ahead of the display limit.
    pub fn deferred(&self) -> &[T] {
        self.pager.deferred(&self.items)
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_pending(&self) -> bool {
        self.load.is_pending()
    }

    /// Whether a short or empty batch has marked the end of the data.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Whether the list can still grow or reveal: `false` once the data is
    /// exhausted and every fetched item is visible. UIs typically hide their
    /// load-more trigger when this turns `false`.
    pub fn has_more(&self) -> bool {
        !(self.exhausted && self.pager.display_limit() >= self.items.len())
    }

    /// The fetch the caller should run now, if any.
    ///
    /// Hands out at most one request at a time, always starting at the end
    /// of the buffer, and only while the buffer holds less than one full
    /// page beyond the display limit (the fetch-ahead budget). Returns
    /// `None` while a fetch is pending, after exhaustion, and while a whole
    /// unrevealed page is already in hand. The caller must eventually answer
    /// with [`InfiniteList::fulfill`] or [`InfiniteList::fail`].
    pub fn next_request(&mut self) -> Option<PageRequest> {
        if self.exhausted || self.load.is_pending() {
            return None;
        }
        let buffered = self
            .items
            .len()
            .saturating_sub(self.pager.display_limit());
        if buffered >= self.pager.page_size() {
            return None;
        }
        let request = PageRequest {
            offset: self.items.len() as u64,
            page_size: self.pager.page_size(),
        };
        self.load = LoadState::Pending(request);
        Some(request)
    }

    /// Reveals the next page, advancing the pager.
    ///
    /// Returns `false` without advancing when there is nothing unrevealed in
    /// the buffer; the caller then polls [`InfiniteList::next_request`] and
    /// retries after the fetch fulfills (or hides the trigger once
    /// [`InfiniteList::has_more`] is `false`).
    pub fn load_more(&mut self) -> bool {
        if self.pager.display_limit() >= self.items.len() {
            return false;
        }
        self.pager.advance();
        true
    }

    /// Appends the batch for the in-flight request and clears it.
    ///
    /// A batch shorter than the requested page size (or empty) marks the
    /// list exhausted: the data source has nothing after it.
    pub fn fulfill(&mut self, batch: Vec<T>) {
        let LoadState::Pending(request) = self.load else {
            debug_assert!(
                self.load.is_pending(),
                "fulfill called with no fetch in flight"
            );
            return;
        };
        if batch.len() < request.page_size {
            self.exhausted = true;
        }
        self.items.extend(batch);
        self.load = LoadState::Idle;
    }

    /// Aborts the in-flight fetch.
    ///
    /// The same span becomes eligible again on the next
    /// [`InfiniteList::next_request`]; retry policy (backoff, giving up) is
    /// the caller's.
    pub fn fail(&mut self) {
        debug_assert!(
            self.load.is_pending(),
            "fail called with no fetch in flight"
        );
        self.load = LoadState::Idle;
    }

    /// Starts a fresh session over new seed items (pull-to-refresh).
    ///
    /// Rebuilds the pager from the original options with the new item count
    /// and an explicit first page, and clears all fetch bookkeeping. A
    /// restore-oriented `InitialPage::Provider` is deliberately not
    /// re-resolved: a reset starts over.
    pub fn reset(&mut self, items: Vec<T>) {
        let mut options = self.pager.options().clone();
        options.initial_item_count = items.len();
        options.initial_page = InitialPage::Value(if items.is_empty() { 0 } else { 1 });
        self.pager = Paginator::new(options);
        self.items = items;
        self.load = LoadState::Idle;
        self.exhausted = false;
    }
}
