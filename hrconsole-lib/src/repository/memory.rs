//! In-memory repository.

use log::debug;

use crate::error::RepositoryError;
use crate::model::{GridRow, RowId};

use super::{Patch, Repository};

/// A [`Repository`] over a `Vec`, seeded with sample data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository<T> {
    rows: Vec<T>,
}

impl<T: GridRow> InMemoryRepository<T> {
    /// Create a repository holding `rows`.
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the repository is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest integer id, for assigning the next one.
    pub fn max_int_id(&self) -> i64 {
        self.rows
            .iter()
            .filter_map(|row| match row.row_id() {
                RowId::Int(id) => Some(id),
                RowId::Text(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    fn position(&self, id: &RowId) -> Result<usize, RepositoryError> {
        self.rows
            .iter()
            .position(|row| &row.row_id() == id)
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }
}

impl<T: GridRow> Repository<T> for InMemoryRepository<T> {
    fn fetch_rows(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.rows.clone())
    }

    fn get_row(&self, id: &RowId) -> Result<T, RepositoryError> {
        let index = self.position(id)?;
        Ok(self.rows[index].clone())
    }

    fn mutate_row(&mut self, id: &RowId, patch: Patch<'_, T>) -> Result<T, RepositoryError> {
        let index = self.position(id)?;
        let row = &mut self.rows[index];
        patch(row);
        debug!("Patched record {}", id);
        Ok(row.clone())
    }

    fn insert_row(&mut self, row: T) -> Result<(), RepositoryError> {
        let id = row.row_id();
        if self.position(&id).is_ok() {
            return Err(RepositoryError::DuplicateId(id));
        }
        debug!("Inserted record {}", id);
        self.rows.push(row);
        Ok(())
    }

    fn delete_rows(&mut self, ids: &[RowId]) -> Result<usize, RepositoryError> {
        let before = self.rows.len();
        self.rows.retain(|row| !ids.contains(&row.row_id()));
        let removed = before - self.rows.len();
        debug!("Deleted {} of {} requested records", removed, ids.len());
        Ok(removed)
    }
}
