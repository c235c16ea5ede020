//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::model::{CellContent, CellValue, GridRow};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Custom cell renderer.
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> CellContent + Send + Sync>;

/// Column configuration.
///
/// Columns declare which field is shown, how it is rendered, and whether it
/// takes part in sorting and searching. Columns are sortable and not
/// searchable unless configured otherwise.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     ColumnDescriptor::new("name", "Name").searchable().width(20),
///     ColumnDescriptor::new("salary", "Salary").align(Alignment::Right),
///     ColumnDescriptor::new("status", "Status")
///         .render(|e: &Employee| CellContent::toned(e.status.label(), e.status.tone())),
/// ];
/// ```
pub struct ColumnDescriptor<T> {
    /// Field key, unique within a grid.
    pub key: String,
    /// Column header text.
    pub header: String,
    /// Whether the column may be sorted.
    pub sortable: bool,
    /// Whether the column takes part in text search.
    pub searchable: bool,
    /// Custom renderer. Without one the field value is stringified.
    pub render: Option<CellRenderer<T>>,
    /// Width in terminal columns. Zero sizes the column from its content.
    pub width: u16,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Pinned to the right edge (action columns).
    pub sticky: bool,
}

impl<T> ColumnDescriptor<T> {
    /// Create a new column for a field key.
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: true,
            searchable: false,
            render: None,
            width: 0,
            align: Alignment::Left,
            sticky: false,
        }
    }

    /// Include the column in text search.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    /// Exclude the column from sorting.
    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    /// Set a custom cell renderer.
    pub fn render(mut self, render: impl Fn(&T) -> CellContent + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Pin the column to the right edge.
    pub fn sticky(mut self) -> Self {
        self.sticky = true;
        self
    }
}

impl<T: GridRow> ColumnDescriptor<T> {
    /// The raw field value for this column.
    pub fn value(&self, row: &T) -> CellValue {
        row.field(&self.key)
    }

    /// Render the cell for a row, falling back to the stringified field.
    pub fn cell(&self, row: &T) -> CellContent {
        match &self.render {
            Some(render) => render(row),
            None => CellContent::plain(self.value(row).to_string()),
        }
    }
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            searchable: self.searchable,
            render: self.render.clone(),
            width: self.width,
            align: self.align,
            sticky: self.sticky,
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("render", &self.render.is_some())
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sticky", &self.sticky)
            .finish()
    }
}
