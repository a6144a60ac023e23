//! Row selection keyed by stable row id.
//!
//! The mapping outlives the current page: rows selected on page 1 stay
//! selected while page 2 is shown and reappear checked when page 1 comes back.
//! Nothing is pruned implicitly; only [`Selection::clear`] resets it.

use std::collections::HashMap;

use crate::row::RowId;

/// Selection state for a table.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    entries: HashMap<RowId, bool>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an id is selected. Unknown ids are unselected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Flip the selection of one row. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        let entry = self.entries.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Set the selection of one row.
    pub fn set(&mut self, id: &str, selected: bool) {
        self.entries.insert(id.to_string(), selected);
    }

    /// Check whether every id is selected.
    ///
    /// An empty set is never "all selected", so the select-all checkbox of an
    /// empty page is never shown checked.
    pub fn all_selected<S: AsRef<str>>(&self, ids: &[S]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.is_selected(id.as_ref()))
    }

    /// Select-all toggle over a set of ids.
    ///
    /// Selects every id unless all of them already are, in which case
    /// deselects them. Other entries are left alone. Returns the value that
    /// was applied.
    pub fn toggle_all<S: AsRef<str>>(&mut self, ids: &[S]) -> bool {
        let selected = !self.all_selected(ids);
        for id in ids {
            self.set(id.as_ref(), selected);
        }
        selected
    }

    /// Number of selected rows across all pages.
    pub fn count(&self) -> usize {
        self.entries.values().filter(|&&selected| selected).count()
    }

    /// Selected ids, sorted for deterministic ordering.
    pub fn selected_ids(&self) -> Vec<RowId> {
        let mut ids: Vec<_> = self
            .entries
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort();
        ids
    }

    /// Forget every entry. Returns how many rows were selected.
    pub fn clear(&mut self) -> usize {
        let count = self.count();
        self.entries.clear();
        count
    }
}
