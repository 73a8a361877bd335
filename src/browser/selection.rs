// SPDX-License-Identifier: MPL-2.0
//! Multi-row selection with one permanently excluded row.
//!
//! The model tracks which record ids are chosen for bulk actions. One
//! externally supplied id can be marked disabled; it is never admitted,
//! neither by toggling nor by select-all.

use crate::browser::columns::RecordId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selected: BTreeSet<RecordId>,
    disabled_row_id: Option<RecordId>,
}

impl SelectionModel {
    #[must_use]
    pub fn new(disabled_row_id: Option<RecordId>) -> Self {
        Self {
            selected: BTreeSet::new(),
            disabled_row_id,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.selected.contains(id)
    }

    /// True if `id` is excluded from selection entirely.
    #[must_use]
    pub fn is_disabled(&self, id: &RecordId) -> bool {
        self.disabled_row_id.as_ref() == Some(id)
    }

    /// Flips membership of `id`; a disabled id is a no-op.
    pub fn toggle(&mut self, id: RecordId) {
        if self.is_disabled(&id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Replaces the selection with every id in `rendered` except the
    /// disabled one.
    pub fn select_all<'a>(&mut self, rendered: impl IntoIterator<Item = &'a RecordId>) {
        self.selected = rendered
            .into_iter()
            .filter(|id| !self.is_disabled(id))
            .cloned()
            .collect();
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drops selected ids that are no longer present in `loaded`. Called
    /// when rows for a changed query arrive, so the selection cannot go
    /// stale against a re-filtered or re-sorted collection.
    pub fn retain_present(&mut self, loaded: &[RecordId]) {
        self.selected.retain(|id| loaded.contains(id));
    }

    /// Selected ids in stable order, as handed to bulk-action callbacks.
    #[must_use]
    pub fn ids(&self) -> Vec<RecordId> {
        self.selected.iter().cloned().collect()
    }

    /// Number of rendered rows eligible for selection, with the disabled
    /// row counted out.
    #[must_use]
    pub fn eligible_count<'a>(&self, rendered: impl IntoIterator<Item = &'a RecordId>) -> usize {
        rendered
            .into_iter()
            .filter(|id| !self.is_disabled(id))
            .count()
    }
}
