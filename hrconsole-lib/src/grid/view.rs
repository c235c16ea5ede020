//! Derived view over the grid's rows.

use std::ops::Range;

/// Row positions produced by the last derivation.
///
/// `filtered` holds indices into the row snapshot in display order (after
/// search, filters and sort). `page` is the slice of `filtered` shown on the
/// current page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Derivation {
    pub filtered: Vec<usize>,
    pub page: Range<usize>,
    pub page_count: usize,
}

impl Derivation {
    pub fn page_indices(&self) -> &[usize] {
        &self.filtered[self.page.clone()]
    }
}

/// The rows to show plus the counts the footer needs.
///
/// Borrowed from the [`Grid`](super::Grid); recomputed after every state
/// change, never edited.
#[derive(Debug, Clone)]
pub struct DerivedView<'a, T> {
    /// Rows on the current page, in display order.
    pub visible_rows: Vec<&'a T>,
    /// Rows left after search and filters.
    pub total_filtered_count: usize,
    /// Number of pages at the current page size.
    pub total_page_count: usize,
    /// Position of the first visible row within the filtered set.
    pub first_row_offset: usize,
}

impl<T> DerivedView<'_, T> {
    /// Returns `true` if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.visible_rows.is_empty()
    }

    /// One-based inclusive range of the visible rows within the filtered
    /// set, for "Showing 11-20 of 42". `None` when empty.
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.visible_rows.is_empty() {
            None
        } else {
            Some((
                self.first_row_offset + 1,
                self.first_row_offset + self.visible_rows.len(),
            ))
        }
    }
}

/// How much of the current page is selected, for the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    None,
    Partial,
    All,
}
