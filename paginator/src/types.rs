/// The cursor to hand to an external fetch for the next batch of items.
///
/// The engine never performs the fetch itself; it only derives where the next
/// batch should start and how many items it should contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    /// Index of the first item the fetch should return.
    pub offset: u64,
    /// Number of items the fetch is expected to return (short batches signal
    /// the end of the data set).
    pub page_size: usize,
}

impl PageRequest {
    /// Exclusive end of the span this request covers.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.page_size as u64)
    }
}

/// A combined snapshot of the derived pagination values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageWindow {
    pub requested_page: u64,
    /// Cursor for the next fetch: `requested_page * page_size + bias`.
    pub offset: u64,
    /// Render cap for already-fetched items: `requested_page * page_size`.
    pub display_limit: usize,
}

/// Advisory emitted when the construction inputs produce a `bias` that is
/// neither `0` nor exactly `page_size`.
///
/// Such a bias means the initially supplied items are not a whole multiple of
/// the page size, so future fetched pages will overlap or gap with the items
/// already displayed. The advisory never changes behavior; it only signals a
/// likely caller misconfiguration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BiasAdvisory {
    pub page_size: usize,
    pub initial_item_count: usize,
    /// `max(0, initial_item_count - page_size)`.
    pub bias: usize,
}

impl BiasAdvisory {
    /// Checks a `(page_size, initial_item_count)` pair for a mismatched bias.
    ///
    /// Pure: this is the whole diagnostic, usable without constructing a
    /// [`crate::Paginator`].
    pub fn check(page_size: usize, initial_item_count: usize) -> Option<Self> {
        let bias = compute_bias(page_size, initial_item_count);
        (bias != 0 && bias != page_size).then(|| Self {
            page_size,
            initial_item_count,
            bias,
        })
    }
}

pub(crate) fn compute_bias(page_size: usize, initial_item_count: usize) -> usize {
    initial_item_count.saturating_sub(page_size)
}
