//! Row identity and the trait the grid reads rows through.

use std::fmt;

use super::CellValue;

/// Stable, unique identifier of a grid row.
///
/// Selection is tracked by id, so it stays correct when rows are filtered,
/// sorted or reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    /// Numeric id (employee number, request number).
    Int(i64),
    /// Text id (invoice number, template slug).
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{}", id),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        RowId::Int(id)
    }
}

impl From<u32> for RowId {
    fn from(id: u32) -> Self {
        RowId::Int(id.into())
    }
}

impl From<&str> for RowId {
    fn from(id: &str) -> Self {
        RowId::Text(id.to_string())
    }
}

impl From<String> for RowId {
    fn from(id: String) -> Self {
        RowId::Text(id)
    }
}

/// Trait for records that can be displayed as rows in a [`Grid`](crate::Grid).
///
/// The grid never inspects the record's shape except through this trait.
///
/// # Example
///
/// ```
/// use hrconsole_lib::{CellValue, GridRow, RowId};
///
/// #[derive(Clone)]
/// struct Employee {
///     id: i64,
///     name: String,
///     dept: String,
/// }
///
/// impl GridRow for Employee {
///     fn row_id(&self) -> RowId {
///         RowId::Int(self.id)
///     }
///
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             "dept" => self.dept.as_str().into(),
///             _ => CellValue::Null,
///         }
///     }
/// }
/// ```
pub trait GridRow: Clone {
    /// Unique identifier for this row.
    ///
    /// Must be stable across reloads of the same record.
    fn row_id(&self) -> RowId;

    /// Value of the field at `key`, or [`CellValue::Null`] if the row has no
    /// such field.
    fn field(&self, key: &str) -> CellValue;
}
