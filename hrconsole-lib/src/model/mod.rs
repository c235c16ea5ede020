//! Row model: identity, typed field values and rendered cell content.

mod content;
mod row;
mod value;

pub use content::{CellContent, Tone};
pub use row::{GridRow, RowId};
pub use value::CellValue;
