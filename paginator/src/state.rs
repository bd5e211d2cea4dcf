/// A lightweight, serializable snapshot of pagination progress.
///
/// Capture it with [`crate::Paginator::state`] and bring it back with
/// [`crate::Paginator::from_state`] when the owning list is recreated (tab
/// restore, TUI session resume). Restoration happens at construction only;
/// a live paginator is still advanced one page at a time.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginatorState {
    pub requested_page: u64,
}
