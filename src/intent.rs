// src/intent.rs
use crate::engine::{CategoryFilter, SortMode};

/// Everything a front end can ask of the session. Presenters emit these;
/// they never mutate session state directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    /// Search box text changed (debounced before a pass runs).
    SearchChanged(String),
    CategoryChanged(CategoryFilter),
    SortChanged(SortMode),
    ClearFilters,
    /// Manual refresh button.
    Refresh,
    /// Retry button on the error state.
    Retry,
    OpenPanel,
    ClosePanel,
}
