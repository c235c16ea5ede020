//! Grid mutator errors

use crate::model::RowId;

use super::DescriptorError;

/// Error returned by grid construction and mutators.
///
/// Every variant is a programmer error: the UI only offers keys and values
/// taken from the descriptors. A mutator that fails leaves the grid state
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The descriptors are invalid.
    #[error("invalid grid descriptors: {0}")]
    Descriptor(#[from] DescriptorError),

    /// No column with this key.
    #[error("unknown column '{key}'")]
    UnknownColumn { key: String },

    /// The column exists but is marked unsortable.
    #[error("column '{key}' is not sortable")]
    NotSortable { key: String },

    /// No filter with this key.
    #[error("unknown filter '{key}'")]
    UnknownFilter { key: String },

    /// The filter exists but does not offer this value.
    #[error("filter '{filter}' has no option '{value}'")]
    UnknownFilterOption { filter: String, value: String },

    /// A page size of zero was requested.
    #[error("page size must be greater than zero")]
    InvalidPageSize,

    /// Selection was requested on a grid created without `selectable`.
    #[error("row selection is disabled for this grid")]
    SelectionDisabled,

    /// No row with this id in the current row set.
    #[error("unknown row '{0}'")]
    UnknownRow(RowId),
}

impl GridError {
    /// Creates an unknown column error.
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }

    /// Creates an unknown filter error.
    pub fn unknown_filter(key: impl Into<String>) -> Self {
        Self::UnknownFilter { key: key.into() }
    }
}
