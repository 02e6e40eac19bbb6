//! Resource kinds and the traits list views are generic over.
//!
//! # Design
//! - One `Record` impl per DTO ties it to its endpoint and sortable columns.
//! - Columns are closed enums so a URL can never select an unknown sort field.

use std::fmt::Debug;
use std::hash::Hash;

/// REST collection a list view is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// `/students`.
    Students,
    /// `/staff`.
    Staff,
}

impl ResourceKind {
    /// Collection base path relative to the API root.
    #[must_use]
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::Students => "/students",
            Self::Staff => "/staff",
        }
    }

    /// Singular noun used in prompts.
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Students => "student",
            Self::Staff => "staff member",
        }
    }

    /// Plural noun used in prompts and empty states.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Students => "students",
            Self::Staff => "staff",
        }
    }

    /// Path for a single record.
    #[must_use]
    pub fn item_path(self, id: i64) -> String {
        format!("{}/{id}", self.base_path())
    }

    /// Path for the toggle-active endpoint.
    #[must_use]
    pub fn toggle_active_path(self, id: i64) -> String {
        format!("{}/{id}/toggle-active", self.base_path())
    }

    /// Path for a bulk endpoint (`delete`, `activate`, ...).
    #[must_use]
    pub fn bulk_path(self, action: &str) -> String {
        format!("{}/bulk/{action}", self.base_path())
    }
}

/// Sortable table column of a resource.
pub trait SortColumn: Copy + Debug + Eq + Hash + Ord + 'static {
    /// Every sortable column, in display order.
    const ALL: &'static [Self];

    /// Field name the API sorts by (`sortBy`).
    fn key(self) -> &'static str;

    /// Column header label.
    fn label(self) -> &'static str;

    /// Parse a `sortBy` value.
    #[must_use]
    fn from_key(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|column| column.key() == value)
    }
}

/// Server record shown in a list view.
pub trait Record: Clone + Debug + PartialEq + 'static {
    /// Sortable columns for this record type.
    type Column: SortColumn;

    /// Collection this record lives in.
    const KIND: ResourceKind;

    /// Identifier, absent before creation.
    fn id(&self) -> Option<i64>;

    /// Whether the record is active; an absent flag counts as active.
    fn is_active(&self) -> bool;

    /// Name shown in confirmations and toasts.
    fn display_name(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::ResourceKind;

    #[test]
    fn paths_are_built_from_base() {
        assert_eq!(ResourceKind::Students.item_path(4), "/students/4");
        assert_eq!(
            ResourceKind::Staff.toggle_active_path(9),
            "/staff/9/toggle-active"
        );
        assert_eq!(
            ResourceKind::Students.bulk_path("send-invite"),
            "/students/bulk/send-invite"
        );
    }
}
