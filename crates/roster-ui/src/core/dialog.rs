//! Create/edit dialog state and form conversion helpers.
//!
//! # Design
//! - Forms hold strings so half-typed values survive re-renders; conversion happens on submit.
//! - Editing works on an owned copy built from the record, never on the record itself.
//! - Required fields are enforced by the markup; conversion only rejects malformed numbers and dates.
//! - Every open starts a new editing session; a save outcome only lands on the session it was
//!   submitted from.

use crate::core::error::ApiError;
use crate::core::resource::Record;
use chrono::NaiveDate;
use std::fmt::Debug;
use thiserror::Error;

/// Client-side conversion failure.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// Date field is not `YYYY-MM-DD`.
    #[error("{field} must be a date (YYYY-MM-DD)")]
    InvalidDate {
        /// Field label.
        field: &'static str,
    },
    /// Numeric field is not a non-negative number.
    #[error("{field} must be a non-negative number")]
    InvalidNumber {
        /// Field label.
        field: &'static str,
    },
}

/// String-backed form for a record type.
pub trait EditForm: Clone + Debug + Default + PartialEq + 'static {
    /// Record produced on submit.
    type Record: Record;

    /// Owned form copy of `record`.
    fn from_record(record: &Self::Record) -> Self;

    /// Convert the form into a request payload.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when a date or number field is malformed.
    fn to_record(&self) -> Result<Self::Record, FormError>;
}

/// Whether the dialog creates or updates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogMode {
    /// New record.
    #[default]
    Create,
    /// Existing record.
    Edit {
        /// Record id.
        id: i64,
    },
}

/// Request the dialog resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission<R> {
    /// `POST /{resource}`.
    Create(R),
    /// `PUT /{resource}/{id}`.
    Update {
        /// Record id.
        id: i64,
        /// Replacement record.
        record: R,
    },
}

impl<R> Submission<R> {
    /// Fallback error when the server gives no message.
    #[must_use]
    pub const fn failure_fallback(&self) -> &'static str {
        match self {
            Self::Create(_) => "Failed to create",
            Self::Update { .. } => "Failed to update",
        }
    }

    /// Past-tense verb for the success toast.
    #[must_use]
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) => "created",
            Self::Update { .. } => "updated",
        }
    }
}

/// Dialog state for one record type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormDialog<F> {
    /// Dialog is visible.
    pub open: bool,
    /// Create or edit.
    pub mode: DialogMode,
    /// Form fields.
    pub form: F,
    /// Error shown under the form.
    pub error: Option<String>,
    /// Number of times the dialog has been opened; identifies the editing session.
    pub opened: u64,
}

/// State transition for [`FormDialog`].
pub enum DialogAction<F: EditForm> {
    /// Open with an empty form.
    OpenCreate,
    /// Open with a copy of the record.
    OpenEdit(F::Record),
    /// Change form fields.
    Edit(Box<dyn FnOnce(&mut F)>),
    /// Discard the form.
    Close,
    /// The form did not convert; show the message inline.
    Invalid(String),
    /// A save from `session` was refused by the server.
    Refused {
        /// Session the save was submitted from.
        session: u64,
        /// Server failure.
        error: ApiError,
        /// Inline text when the server gave none.
        fallback: &'static str,
    },
    /// A save from `session` succeeded.
    Saved {
        /// Session the save was submitted from.
        session: u64,
    },
}

impl<F: EditForm> FormDialog<F> {
    /// Open with an empty form.
    pub fn open_create(&mut self) {
        *self = Self {
            open: true,
            mode: DialogMode::Create,
            form: F::default(),
            error: None,
            opened: self.opened.wrapping_add(1),
        };
    }

    /// Open with a copy of `record`; a record without id opens as create.
    pub fn open_edit(&mut self, record: &F::Record) {
        *self = Self {
            open: true,
            mode: record
                .id()
                .map_or(DialogMode::Create, |id| DialogMode::Edit { id }),
            form: F::from_record(record),
            error: None,
            opened: self.opened.wrapping_add(1),
        };
    }

    /// Discard the form.
    pub fn close(&mut self) {
        *self = Self {
            opened: self.opened,
            ..Self::default()
        };
    }

    /// Current editing session, `None` while closed.
    #[must_use]
    pub const fn session(&self) -> Option<u64> {
        if self.open { Some(self.opened) } else { None }
    }

    /// Apply an edit to the form fields.
    pub fn edit(&mut self, update: impl FnOnce(&mut F)) {
        update(&mut self.form);
    }

    /// Keep the dialog open and show `message`.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Whether the dialog edits an existing record.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(self.mode, DialogMode::Edit { .. })
    }

    /// Apply `action`. A refused save whose session is no longer open leaves
    /// the dialog untouched and hands its error back for reporting elsewhere.
    pub fn apply(&mut self, action: DialogAction<F>) -> Option<ApiError> {
        match action {
            DialogAction::OpenCreate => self.open_create(),
            DialogAction::OpenEdit(record) => self.open_edit(&record),
            DialogAction::Edit(update) => self.edit(update),
            DialogAction::Close => self.close(),
            DialogAction::Invalid(message) => self.fail(message),
            DialogAction::Refused {
                session,
                error,
                fallback,
            } => {
                if self.session() != Some(session) {
                    return Some(error);
                }
                self.fail(error.display_message(fallback));
            }
            DialogAction::Saved { session } => {
                if self.session() == Some(session) {
                    self.close();
                }
            }
        }
        None
    }

    /// Build the request for the current form.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when the form does not convert.
    pub fn submission(&self) -> Result<Submission<F::Record>, FormError> {
        let record = self.form.to_record()?;
        Ok(match self.mode {
            DialogMode::Create => Submission::Create(record),
            DialogMode::Edit { id } => Submission::Update { id, record },
        })
    }
}

/// Trimmed text, `None` when blank.
#[must_use]
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse an optional `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`FormError::InvalidDate`] for non-blank, unparseable input.
pub fn parse_optional_date(
    field: &'static str,
    value: &str,
) -> Result<Option<NaiveDate>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FormError::InvalidDate { field })
}

/// Parse an optional non-negative amount.
///
/// # Errors
///
/// Returns [`FormError::InvalidNumber`] for non-blank input that is not a
/// finite, non-negative number.
pub fn parse_optional_amount(field: &'static str, value: &str) -> Result<Option<f64>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(Some(amount)),
        _ => Err(FormError::InvalidNumber { field }),
    }
}

/// Render an optional date for a date input.
#[must_use]
pub fn date_text(value: Option<NaiveDate>) -> String {
    value.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default()
}
