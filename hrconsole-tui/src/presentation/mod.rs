//! Terminal presentation of a [`Grid`](hrconsole_lib::Grid).
//!
//! Draws the toolbar, header, body and footer from the grid's state and
//! derived view, and turns user gestures into grid mutator calls. The only
//! state kept here is the row cursor, the body scroll offset and the focused
//! header, which the engine has no notion of.

mod gesture;
mod layout;
mod render;

pub use gesture::{Gesture, apply};
pub use render::{RenderContext, render_grid};

use std::cell::Cell;

use hrconsole_lib::{Grid, GridRow};

/// Presentation-only state of one grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridUi {
    /// Index of the focused row within the current page.
    pub cursor: usize,
    /// First page row drawn in the body. Updated while drawing, once the
    /// body height is known.
    scroll: Cell<usize>,
    /// Index of the column whose header has keyboard focus.
    pub focused_column: Option<usize>,
}

impl GridUi {
    /// Start with the cursor on the first row and focus on the first
    /// sortable column.
    pub fn new<T: GridRow>(grid: &Grid<T>) -> Self {
        Self {
            cursor: 0,
            scroll: Cell::new(0),
            focused_column: grid.columns().iter().position(|c| c.sortable),
        }
    }

    /// The row under the cursor.
    pub fn cursor_row<'a, T: GridRow>(&self, grid: &'a Grid<T>) -> Option<&'a T> {
        grid.view().visible_rows.get(self.cursor).copied()
    }

    /// Keep the cursor on an existing row.
    pub fn clamp(&mut self, visible: usize) {
        self.cursor = self.cursor.min(visible.saturating_sub(1));
    }

    /// Move the scroll offset just enough to keep the cursor inside a body
    /// `height` lines tall, and return it.
    pub fn scroll_into_view(&self, height: usize, visible: usize) -> usize {
        let mut top = self.scroll.get().min(visible.saturating_sub(height));
        if self.cursor < top {
            top = self.cursor;
        } else if height > 0 && self.cursor >= top + height {
            top = self.cursor + 1 - height;
        }
        self.scroll.set(top);
        top
    }
}
