//! HR console grid library
//!
//! A generic, reusable data grid (search, facet filters, sorting, pagination
//! and row selection) plus the row-action, repository and outcome types the
//! console's admin pages are built on.

pub mod action;
pub mod error;
pub mod grid;
pub mod model;
pub mod repository;

pub use action::{ActionKind, Outcome, RowAction, Success};
pub use grid::{
    Alignment, ColumnDescriptor, DerivedView, FilterDescriptor, FilterOption, Grid, GridOptions,
    GridState, PageSelection, SortDirection, SortState, ToolbarAction,
};
pub use model::{CellContent, CellValue, GridRow, RowId, Tone};
pub use repository::{InMemoryRepository, Patch, Repository};
