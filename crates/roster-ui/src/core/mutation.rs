//! In-flight mutation tracking.

use std::collections::BTreeSet;

/// Mutating operation a list view can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MutationKind {
    /// Create or update from the dialog.
    Save,
    /// Single-row delete.
    Delete,
    /// Single-row toggle-active.
    ToggleActive,
    /// Bulk delete.
    BulkDelete,
    /// Bulk activate.
    BulkActivate,
    /// Bulk deactivate.
    BulkDeactivate,
    /// Bulk invite send.
    BulkInvite,
    /// CSV import.
    ImportCsv,
    /// CSV export; read-only, tracked only to disable the button.
    ExportCsv,
}

impl MutationKind {
    /// Operates on the current selection.
    #[must_use]
    pub const fn is_bulk(self) -> bool {
        matches!(
            self,
            Self::BulkDelete | Self::BulkActivate | Self::BulkDeactivate | Self::BulkInvite
        )
    }

    /// Success changes server state the list shows.
    #[must_use]
    pub const fn invalidates_cache(self) -> bool {
        !matches!(self, Self::ExportCsv)
    }

    /// Success empties the selection.
    #[must_use]
    pub const fn clears_selection(self) -> bool {
        self.is_bulk()
    }

    /// Path segment of the bulk endpoint.
    #[must_use]
    pub const fn bulk_action(self) -> Option<&'static str> {
        match self {
            Self::BulkDelete => Some("delete"),
            Self::BulkActivate => Some("activate"),
            Self::BulkDeactivate => Some("deactivate"),
            Self::BulkInvite => Some("send-invite"),
            _ => None,
        }
    }

    /// Generic failure text shown when the server gives no message.
    #[must_use]
    pub const fn failure_fallback(self) -> &'static str {
        match self {
            Self::Save => "Failed to save",
            Self::Delete => "Failed to delete",
            Self::ToggleActive => "Failed to update status",
            Self::BulkDelete => "Bulk delete failed",
            Self::BulkActivate => "Bulk activate failed",
            Self::BulkDeactivate => "Bulk deactivate failed",
            Self::BulkInvite => "Failed to send invites",
            Self::ImportCsv => "Import failed",
            Self::ExportCsv => "Export failed",
        }
    }
}

/// Set of mutation kinds currently awaiting a response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingMutations {
    kinds: BTreeSet<MutationKind>,
}

impl PendingMutations {
    /// Mark `kind` in flight. Returns `false` when it already is.
    pub fn start(&mut self, kind: MutationKind) -> bool {
        self.kinds.insert(kind)
    }

    /// Mark `kind` settled.
    pub fn finish(&mut self, kind: MutationKind) {
        self.kinds.remove(&kind);
    }

    /// Whether `kind` is awaiting a response.
    #[must_use]
    pub fn is_pending(&self, kind: MutationKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Whether any bulk mutation is awaiting a response.
    #[must_use]
    pub fn any_bulk(&self) -> bool {
        self.kinds.iter().any(|kind| kind.is_bulk())
    }

    /// Whether the control for `kind` should be disabled.
    #[must_use]
    pub fn blocks(&self, kind: MutationKind) -> bool {
        self.is_pending(kind) || (kind.is_bulk() && self.any_bulk())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_start_is_refused() {
        let mut pending = PendingMutations::default();
        assert!(pending.start(MutationKind::Save));
        assert!(!pending.start(MutationKind::Save));
        pending.finish(MutationKind::Save);
        assert!(pending.start(MutationKind::Save));
    }

    #[test]
    fn any_bulk_blocks_every_bulk_control() {
        let mut pending = PendingMutations::default();
        pending.start(MutationKind::BulkActivate);
        assert!(pending.blocks(MutationKind::BulkDelete));
        assert!(pending.blocks(MutationKind::BulkInvite));
        assert!(!pending.blocks(MutationKind::Save));
    }

    #[test]
    fn export_leaves_cache_alone() {
        assert!(!MutationKind::ExportCsv.invalidates_cache());
        assert!(MutationKind::ImportCsv.invalidates_cache());
        assert!(!MutationKind::ImportCsv.clears_selection());
        assert!(MutationKind::BulkInvite.clears_selection());
    }

    #[test]
    fn bulk_actions_map_to_endpoints() {
        assert_eq!(MutationKind::BulkInvite.bulk_action(), Some("send-invite"));
        assert_eq!(MutationKind::Delete.bulk_action(), None);
    }
}
