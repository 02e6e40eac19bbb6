//! Page-scoped row selection.
//!
//! # Design
//! - Selection only ever refers to ids on the loaded page; cross-page selection is not supported.
//! - Derived flags are computed against the page ids passed in, never cached.

use crate::core::resource::Record;
use std::collections::BTreeSet;

/// Selected row identifiers for the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<i64>,
}

/// Flags derived from a selection against the visible rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    /// Number of selected rows.
    pub count: usize,
    /// Every row on a non-empty page is selected.
    pub all_selected: bool,
    /// Some but not all rows are selected.
    pub indeterminate: bool,
    /// At least one selected row is active.
    pub any_active: bool,
    /// At least one selected row is inactive.
    pub any_inactive: bool,
}

impl SelectionSummary {
    /// Whether the bulk bar should render.
    #[must_use]
    pub const fn has_selection(self) -> bool {
        self.count > 0
    }

    /// "Activate" applies to at least one selected row.
    #[must_use]
    pub const fn can_activate(self) -> bool {
        self.any_inactive
    }

    /// "Deactivate" applies to at least one selected row.
    #[must_use]
    pub const fn can_deactivate(self) -> bool {
        self.any_active
    }
}

impl Selection {
    /// Flip membership of `id`.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Header checkbox: clear when the whole page is selected, otherwise
    /// select exactly the page.
    pub fn toggle_all(&mut self, page_ids: &[i64]) {
        if self.all_selected(page_ids) {
            self.ids.clear();
        } else {
            self.ids = page_ids.iter().copied().collect();
        }
    }

    /// Drop every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that are no longer on the page.
    pub fn retain_visible(&mut self, page_ids: &[i64]) {
        self.ids.retain(|id| page_ids.contains(id));
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order, as sent in bulk requests.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }

    /// True only for a non-empty page whose ids are all selected.
    #[must_use]
    pub fn all_selected(&self, page_ids: &[i64]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Tri-state checkbox flag.
    #[must_use]
    pub fn indeterminate(&self, page_ids: &[i64]) -> bool {
        !self.ids.is_empty() && !self.all_selected(page_ids)
    }

    /// Compute the bulk bar flags against the visible rows.
    #[must_use]
    pub fn summarize<T: Record>(&self, rows: &[T]) -> SelectionSummary {
        let page_ids: Vec<i64> = rows.iter().filter_map(Record::id).collect();
        let selected = rows
            .iter()
            .filter(|row| row.id().is_some_and(|id| self.ids.contains(&id)));
        let (any_active, any_inactive) =
            selected.fold((false, false), |(active, inactive), row| {
                if row.is_active() {
                    (true, inactive)
                } else {
                    (active, true)
                }
            });
        SelectionSummary {
            count: self.ids.len(),
            all_selected: self.all_selected(&page_ids),
            indeterminate: self.indeterminate(&page_ids),
            any_active,
            any_inactive,
        }
    }
}
