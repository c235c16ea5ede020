//! The grid engine: state, mutators and derivation.

use log::debug;

use crate::error::GridError;
use crate::model::{GridRow, RowId};

use super::column::ColumnDescriptor;
use super::filter::FilterDescriptor;
use super::options::GridOptions;
use super::order::{SortState, compare_values};
use super::state::GridState;
use super::view::{Derivation, DerivedView, PageSelection};

/// A searchable, filterable, sortable, paginated and selectable grid.
///
/// `Grid<T>` holds the column and filter descriptors, the current row
/// snapshot supplied by the host, and a [`GridState`]. After every mutation
/// it re-derives the visible rows in a fixed order:
///
/// 1. search text (case-insensitive substring over searchable columns, OR)
/// 2. facet filters (exact match, AND across filters)
/// 3. sort
/// 4. pagination
///
/// The grid never edits row contents and performs no side effects.
///
/// # Example
///
/// ```ignore
/// let mut grid = Grid::with_rows(columns, GridOptions::new().page_size(2), employees)?;
/// grid.set_filter("dept", Some("HR"))?;
/// grid.set_sort("name")?;
/// for row in grid.view().visible_rows {
///     println!("{}", row.name);
/// }
/// ```
#[derive(Debug)]
pub struct Grid<T> {
    columns: Vec<ColumnDescriptor<T>>,
    options: GridOptions,
    rows: Vec<T>,
    state: GridState,
    derived: Derivation,
}

impl<T: GridRow> Grid<T> {
    /// Create an empty grid.
    ///
    /// Fails if the descriptors are malformed (duplicate keys, duplicate
    /// option values, zero page size).
    pub fn new(columns: Vec<ColumnDescriptor<T>>, options: GridOptions) -> Result<Self, GridError> {
        Self::with_rows(columns, options, Vec::new())
    }

    /// Create a grid with an initial row snapshot.
    pub fn with_rows(
        columns: Vec<ColumnDescriptor<T>>,
        mut options: GridOptions,
        rows: Vec<T>,
    ) -> Result<Self, GridError> {
        options.validate(&columns)?;
        let state = GridState::new(options.page_size);
        let mut grid = Self {
            columns,
            options,
            rows,
            state,
            derived: Derivation::default(),
        };
        grid.derive();
        Ok(grid)
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// Column descriptors.
    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    /// Find a column by key.
    pub fn column(&self, key: &str) -> Option<&ColumnDescriptor<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Filter descriptors.
    pub fn filters(&self) -> &[FilterDescriptor] {
        &self.options.filters
    }

    /// Find a filter by key.
    pub fn filter(&self, key: &str) -> Option<&FilterDescriptor> {
        self.options.filters.iter().find(|f| f.key == key)
    }

    /// Construction options.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    /// Current state.
    pub fn state(&self) -> &GridState {
        &self.state
    }

    /// The current row snapshot, unfiltered.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// The derived view for the current state.
    pub fn view(&self) -> DerivedView<'_, T> {
        DerivedView {
            visible_rows: self
                .derived
                .page_indices()
                .iter()
                .map(|&i| &self.rows[i])
                .collect(),
            total_filtered_count: self.derived.filtered.len(),
            total_page_count: self.derived.page_count,
            first_row_offset: self.derived.page.start,
        }
    }

    /// All rows passing search and filters, in sorted order, across pages.
    pub fn filtered_rows(&self) -> Vec<&T> {
        self.derived.filtered.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Ids of the rows on the current page.
    pub fn page_row_ids(&self) -> Vec<RowId> {
        self.derived
            .page_indices()
            .iter()
            .map(|&i| self.rows[i].row_id())
            .collect()
    }

    /// Rows whose id is selected, in snapshot order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows
            .iter()
            .filter(|row| self.state.selection.contains(&row.row_id()))
            .collect()
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.state.selection.contains(id)
    }

    /// Selection of the current page: `selected ∩ page rows`.
    pub fn page_selection(&self) -> PageSelection {
        let ids = self.page_row_ids();
        let selected = ids.iter().filter(|id| self.is_selected(id)).count();
        if selected == 0 {
            PageSelection::None
        } else if selected == ids.len() {
            PageSelection::All
        } else {
            PageSelection::Partial
        }
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Replace the row snapshot.
    ///
    /// Keeps search, filters, sort and page size. Selected ids that no
    /// longer exist are dropped and the page index is clamped.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        let ids: std::collections::HashSet<RowId> = self.rows.iter().map(GridRow::row_id).collect();
        let dropped = self.state.selection.retain(|id| ids.contains(id));
        if dropped > 0 {
            debug!("Dropped {} stale selected rows", dropped);
        }
        self.derive();
    }

    // -------------------------------------------------------------------------
    // Mutators
    // -------------------------------------------------------------------------

    /// Set the search text and go back to the first page.
    ///
    /// An empty string disables search.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.state.page_index = 0;
        debug!("Grid search set to {:?}", self.state.search_text);
        self.derive();
    }

    /// Select a filter value, or clear the filter with `None`, and go back to
    /// the first page.
    pub fn set_filter(&mut self, key: &str, value: Option<&str>) -> Result<(), GridError> {
        let filter = self.filter(key).ok_or_else(|| GridError::unknown_filter(key))?;
        match value {
            Some(value) => {
                if filter.find_option(value).is_none() {
                    return Err(GridError::UnknownFilterOption {
                        filter: key.to_string(),
                        value: value.to_string(),
                    });
                }
                self.state
                    .active_filters
                    .insert(key.to_string(), value.to_string());
            }
            None => {
                self.state.active_filters.remove(key);
            }
        }
        self.state.page_index = 0;
        debug!("Grid filter {} set to {:?}", key, value);
        self.derive();
        Ok(())
    }

    /// Clear every filter and the search text.
    pub fn clear_filters(&mut self) {
        self.state.active_filters.clear();
        self.state.search_text.clear();
        self.state.page_index = 0;
        self.derive();
    }

    /// Activate a column header: cycles `asc -> desc -> unsorted` on the same
    /// column, starts at `asc` on another.
    pub fn set_sort(&mut self, key: &str) -> Result<(), GridError> {
        let column = self.column(key).ok_or_else(|| GridError::unknown_column(key))?;
        if !column.sortable {
            return Err(GridError::NotSortable {
                key: key.to_string(),
            });
        }
        self.state.sort = SortState::cycle(self.state.sort.as_ref(), key);
        debug!("Grid sort now {:?}", self.state.sort);
        self.derive();
        Ok(())
    }

    /// Go to a page. Out-of-range indices are clamped.
    pub fn set_page_index(&mut self, index: usize) {
        let last = self.derived.page_count.saturating_sub(1);
        self.state.page_index = index.min(last);
        self.derive();
    }

    /// Next page, if any.
    pub fn next_page(&mut self) {
        self.set_page_index(self.state.page_index.saturating_add(1));
    }

    /// Previous page, if any.
    pub fn previous_page(&mut self) {
        self.set_page_index(self.state.page_index.saturating_sub(1));
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), GridError> {
        if size == 0 {
            return Err(GridError::InvalidPageSize);
        }
        self.state.page_size = size;
        self.state.page_index = 0;
        debug!("Grid page size set to {}", size);
        self.derive();
        Ok(())
    }

    /// Toggle selection of one row.
    pub fn toggle_row_selection(&mut self, id: &RowId) -> Result<(), GridError> {
        self.ensure_selectable()?;
        if !self.rows.iter().any(|row| &row.row_id() == id) {
            return Err(GridError::UnknownRow(id.clone()));
        }
        self.state.selection.toggle(id);
        Ok(())
    }

    /// Toggle selection of the rows on the current page only.
    ///
    /// If every visible row is already selected they are all deselected,
    /// otherwise they are all selected. Rows on other pages are untouched.
    pub fn toggle_select_all(&mut self) -> Result<(), GridError> {
        self.ensure_selectable()?;
        let ids = self.page_row_ids();
        if self.page_selection() == PageSelection::All {
            self.state.selection.remove_all(&ids);
        } else {
            self.state.selection.extend(&ids);
        }
        debug!(
            "Toggled page selection, {} rows selected",
            self.state.selection.len()
        );
        Ok(())
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        self.state.selection.clear();
    }

    /// Return to the initial state, keeping the configured page size.
    pub fn reset(&mut self) {
        self.state = GridState::new(self.options.page_size);
        self.derive();
    }

    fn ensure_selectable(&self) -> Result<(), GridError> {
        if self.options.selectable {
            Ok(())
        } else {
            Err(GridError::SelectionDisabled)
        }
    }

    // -------------------------------------------------------------------------
    // Derivation
    // -------------------------------------------------------------------------

    fn matches_search(&self, row: &T, needle: &str) -> bool {
        self.columns
            .iter()
            .filter(|c| c.searchable)
            .any(|c| c.value(row).to_string().to_lowercase().contains(needle))
    }

    fn matches_filters(&self, row: &T) -> bool {
        self.state.active_filters.iter().all(|(key, value)| {
            self.filter(key)
                .is_some_and(|filter| filter.matches(row, value))
        })
    }

    fn derive(&mut self) {
        let needle = self.state.search_text.to_lowercase();
        let mut filtered: Vec<usize> = (0..self.rows.len())
            .filter(|&i| {
                let row = &self.rows[i];
                (needle.is_empty() || self.matches_search(row, &needle))
                    && self.matches_filters(row)
            })
            .collect();

        if let Some(sort) = &self.state.sort {
            let mut keyed: Vec<_> = filtered
                .iter()
                .map(|&i| (i, self.rows[i].field(&sort.key)))
                .collect();
            keyed.sort_by(|(_, a), (_, b)| compare_values(a, b, sort.direction));
            filtered = keyed.into_iter().map(|(i, _)| i).collect();
        }

        let page_size = self.state.page_size;
        let page_count = filtered.len().div_ceil(page_size);
        self.state.page_index = self.state.page_index.min(page_count.saturating_sub(1));
        let start = (self.state.page_index * page_size).min(filtered.len());
        let end = (start + page_size).min(filtered.len());

        self.derived = Derivation {
            filtered,
            page: start..end,
            page_count,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        label: &'static str,
    }

    impl GridRow for Item {
        fn row_id(&self) -> RowId {
            RowId::Int(self.id)
        }

        fn field(&self, key: &str) -> CellValue {
            match key {
                "id" => self.id.into(),
                "label" => self.label.into(),
                _ => CellValue::Null,
            }
        }
    }

    fn items(n: i64) -> Vec<Item> {
        (1..=n).map(|id| Item { id, label: "x" }).collect()
    }

    fn grid(rows: Vec<Item>, page_size: usize) -> Grid<Item> {
        Grid::with_rows(
            vec![
                ColumnDescriptor::new("id", "ID"),
                ColumnDescriptor::new("label", "Label").searchable(),
            ],
            GridOptions::new().page_size(page_size).selectable(true),
            rows,
        )
        .unwrap()
    }

    #[test]
    fn test_empty_grid_has_no_pages() {
        let mut grid = grid(Vec::new(), 5);
        assert_eq!(grid.view().total_page_count, 0);
        grid.set_page_index(3);
        assert_eq!(grid.state().page_index(), 0);
        assert!(grid.view().is_empty());
    }

    #[test]
    fn test_set_rows_prunes_selection_and_clamps_page() {
        let mut grid = grid(items(6), 2);
        grid.set_page_index(2);
        grid.toggle_select_all().unwrap();
        assert_eq!(grid.state().selection().len(), 2);

        grid.set_rows(items(3));
        assert_eq!(grid.state().page_index(), 1);
        assert!(grid.state().selection().is_empty());
    }

    #[test]
    fn test_showing_range() {
        let mut grid = grid(items(5), 2);
        grid.set_page_index(1);
        assert_eq!(grid.view().showing(), Some((3, 4)));
    }
}
