//! Dismissible result banner shown above a list after import/invite runs.

use roster_api_models::{BulkInviteResult, ImportResult};

/// Visual tone of a banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerTone {
    /// Everything succeeded.
    Success,
    /// Partial failure.
    Warning,
    /// Whole operation rejected.
    Error,
}

/// Structured outcome of a bulk operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    /// CSV import result.
    Import {
        /// Rows created.
        imported: u32,
        /// Rows rejected.
        failed: u32,
        /// Per-row messages.
        errors: Vec<String>,
    },
    /// Bulk invite result.
    Invite {
        /// Invites delivered.
        sent: u32,
        /// Invites not delivered.
        failed: u32,
        /// Per-recipient messages.
        errors: Vec<String>,
    },
    /// Operation rejected as a whole (e.g. no active students in the selection).
    Error(String),
}

impl From<ImportResult> for Banner {
    fn from(result: ImportResult) -> Self {
        Self::Import {
            imported: result.imported,
            failed: result.failed,
            errors: result.errors,
        }
    }
}

impl From<BulkInviteResult> for Banner {
    fn from(result: BulkInviteResult) -> Self {
        Self::Invite {
            sent: result.sent,
            failed: result.failed,
            errors: result.errors,
        }
    }
}

impl Banner {
    /// Headline counters, e.g. `["3 imported", "1 failed"]`.
    #[must_use]
    pub fn counters(&self) -> Vec<String> {
        let (done, failed) = match self {
            Self::Import {
                imported, failed, ..
            } => (format!("{imported} imported"), *failed),
            Self::Invite { sent, failed, .. } => (format!("{sent} invites sent"), *failed),
            Self::Error(message) => return vec![message.clone()],
        };
        let mut counters = vec![done];
        if failed > 0 {
            counters.push(format!("{failed} failed"));
        }
        counters
    }

    /// Detail lines listed under the counters.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Import { errors, .. } | Self::Invite { errors, .. } => errors,
            Self::Error(_) => &[],
        }
    }

    /// Banner tone.
    #[must_use]
    pub fn tone(&self) -> BannerTone {
        match self {
            Self::Error(_) => BannerTone::Error,
            Self::Import { failed, errors, .. } | Self::Invite { failed, errors, .. }
                if *failed > 0 || !errors.is_empty() =>
            {
                BannerTone::Warning
            }
            Self::Import { .. } | Self::Invite { .. } => BannerTone::Success,
        }
    }
}
