//! Grid state.

use std::collections::BTreeMap;

use crate::model::RowId;

use super::order::{SortDirection, SortState};
use super::selection::Selection;

/// The mutable state a grid owns.
///
/// Created with defaults when the grid is built and changed only through
/// [`Grid`](super::Grid) mutators. Nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    pub(crate) search_text: String,
    pub(crate) active_filters: BTreeMap<String, String>,
    pub(crate) sort: Option<SortState>,
    pub(crate) page_index: usize,
    pub(crate) page_size: usize,
    pub(crate) selection: Selection,
}

impl GridState {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            active_filters: BTreeMap::new(),
            sort: None,
            page_index: 0,
            page_size,
            selection: Selection::new(),
        }
    }

    /// Current search text. Empty means no search.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Selected value per filter key.
    pub fn active_filters(&self) -> &BTreeMap<String, String> {
        &self.active_filters
    }

    /// Selected value of one filter.
    pub fn filter_value(&self, key: &str) -> Option<&str> {
        self.active_filters.get(key).map(String::as_str)
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Key of the sorted column.
    pub fn sort_key(&self) -> Option<&str> {
        self.sort.as_ref().map(|s| s.key.as_str())
    }

    /// Direction of the sort.
    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort.as_ref().map(|s| s.direction)
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Selected row ids.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selection.contains(id)
    }
}
