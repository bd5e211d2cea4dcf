use alloc::sync::Arc;

use crate::paginator::Paginator;
use crate::types::BiasAdvisory;

/// A callback fired when the paginator's state changes (advance or
/// reconfiguration).
pub type OnChangeCallback = Arc<dyn Fn(&Paginator) + Send + Sync>;

/// A callback fired when construction or reconfiguration produces a bias that
/// is inconsistent with the page size.
///
/// Advisory only: the paginator's behavior is identical with or without it.
/// See [`BiasAdvisory`].
pub type AdvisoryCallback = Arc<dyn Fn(&BiasAdvisory) + Send + Sync>;

/// Initial page configuration.
#[derive(Clone)]
pub enum InitialPage {
    /// A fixed initial page.
    Value(u64),
    /// A lazily evaluated initial page provider (called once by
    /// `Paginator::new`), e.g. to pick up a page persisted by a previous
    /// session.
    Provider(Arc<dyn Fn() -> u64 + Send + Sync>),
}

impl InitialPage {
    pub(crate) fn resolve(&self) -> u64 {
        match self {
            Self::Value(v) => *v,
            Self::Provider(f) => f(),
        }
    }
}

impl Default for InitialPage {
    fn default() -> Self {
        Self::Value(1)
    }
}

impl core::fmt::Debug for InitialPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Configuration for [`crate::Paginator`].
///
/// Cheap to clone: callbacks are stored in `Arc`s so adapters can tweak a few
/// fields and call `Paginator::set_options` without reallocating closures.
#[derive(Clone)]
pub struct PaginatorOptions {
    /// Number of items per fetched page. Must be positive; zero is a caller
    /// contract violation (debug-asserted, not handled at runtime).
    pub page_size: usize,

    /// Number of items already in hand before any pagination happens (e.g.
    /// server-prefetched items). Together with `page_size` this fixes the
    /// fetch-offset bias; see [`crate::Paginator::bias`].
    pub initial_item_count: usize,

    /// The page the counter starts at. Defaults to 1.
    pub initial_page: InitialPage,

    /// Optional callback fired after every state change.
    pub on_change: Option<OnChangeCallback>,

    /// Optional callback fired when the computed bias is neither `0` nor
    /// exactly `page_size`.
    pub on_advisory: Option<AdvisoryCallback>,
}

impl PaginatorOptions {
    /// Creates options for a list fetched `page_size` items at a time, with
    /// no prefetched items and an initial page of 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            initial_item_count: 0,
            initial_page: InitialPage::default(),
            on_change: None,
            on_advisory: None,
        }
    }

    pub fn with_initial_item_count(mut self, initial_item_count: usize) -> Self {
        self.initial_item_count = initial_item_count;
        self
    }

    pub fn with_initial_page(mut self, initial_page: InitialPage) -> Self {
        self.initial_page = initial_page;
        self
    }

    pub fn with_initial_page_value(mut self, initial_page: u64) -> Self {
        self.initial_page = InitialPage::Value(initial_page);
        self
    }

    pub fn with_initial_page_provider(
        mut self,
        initial_page: impl Fn() -> u64 + Send + Sync + 'static,
    ) -> Self {
        self.initial_page = InitialPage::Provider(Arc::new(initial_page));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Paginator) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_advisory(
        mut self,
        on_advisory: Option<impl Fn(&BiasAdvisory) + Send + Sync + 'static>,
    ) -> Self {
        self.on_advisory = on_advisory.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for PaginatorOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PaginatorOptions")
            .field("page_size", &self.page_size)
            .field("initial_item_count", &self.initial_item_count)
            .field("initial_page", &self.initial_page)
            .finish_non_exhaustive()
    }
}
