//! Generic data grid.
//!
//! The grid is configured with:
//! - [`ColumnDescriptor`]s: which fields are shown, rendered, sorted, searched
//! - [`FilterDescriptor`]s: discrete-value facets over fields
//! - [`GridOptions`]: placeholder, selection, page sizes, toolbar and row actions
//!
//! [`Grid`] owns the [`GridState`] and derives a [`DerivedView`] after every
//! mutation.

mod column;
mod engine;
mod filter;
mod options;
mod order;
mod selection;
mod state;
mod view;

pub use column::{Alignment, CellRenderer, ColumnDescriptor};
pub use engine::Grid;
pub use filter::{FilterDescriptor, FilterOption};
pub use options::{DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, GridOptions, ToolbarAction};
pub use order::{SortDirection, SortState, compare_text, compare_values};
pub use selection::Selection;
pub use state::GridState;
pub use view::{DerivedView, PageSelection};
