//! Row storage behind the admin pages.
//!
//! Pages talk to a [`Repository`] instead of keeping rows in local state, so
//! a real backend can be substituted without touching the grid.

mod memory;

pub use memory::InMemoryRepository;

use crate::error::RepositoryError;
use crate::model::{GridRow, RowId};

/// In-place change applied to one record.
pub type Patch<'a, T> = Box<dyn FnOnce(&mut T) + 'a>;

/// Storage for the rows of one page.
pub trait Repository<T: GridRow> {
    /// All rows, in storage order.
    fn fetch_rows(&self) -> Result<Vec<T>, RepositoryError>;

    /// One row by id.
    fn get_row(&self, id: &RowId) -> Result<T, RepositoryError>;

    /// Apply a patch to one row and return the updated row.
    fn mutate_row(&mut self, id: &RowId, patch: Patch<'_, T>) -> Result<T, RepositoryError>;

    /// Add a new row. Fails if the id is taken.
    fn insert_row(&mut self, row: T) -> Result<(), RepositoryError>;

    /// Remove rows by id. Returns how many were removed; unknown ids are
    /// skipped.
    fn delete_rows(&mut self, ids: &[RowId]) -> Result<usize, RepositoryError>;
}
