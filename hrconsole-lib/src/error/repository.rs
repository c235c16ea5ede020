//! Repository errors

use crate::model::RowId;

/// Error type for [`Repository`](crate::Repository) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// No record with this id.
    #[error("record '{0}' not found")]
    NotFound(RowId),

    /// A record with this id already exists.
    #[error("record '{0}' already exists")]
    DuplicateId(RowId),
}
