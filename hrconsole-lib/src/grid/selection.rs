//! ID-based row selection.

use std::collections::HashSet;

use crate::model::RowId;

/// Selected row ids.
///
/// Selection is keyed by [`RowId`], so it survives filtering, sorting and
/// page navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<RowId>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected ids (sorted for deterministic ordering).
    pub fn ids(&self) -> Vec<RowId> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an id is selected.
    pub fn contains(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle one id. Returns `true` if it is now selected.
    pub fn toggle(&mut self, id: &RowId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Select every id.
    pub fn extend<'a>(&mut self, ids: impl IntoIterator<Item = &'a RowId>) {
        self.selected.extend(ids.into_iter().cloned());
    }

    /// Deselect every id.
    pub fn remove_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a RowId>) {
        for id in ids {
            self.selected.remove(id);
        }
    }

    /// Keep only ids for which `keep` returns true.
    /// Returns the number of ids dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&RowId) -> bool) -> usize {
        let before = self.selected.len();
        self.selected.retain(|id| keep(id));
        before - self.selected.len()
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
