//! Student feature state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Convert to the shared DTO only on submit.
//! - Carry fields the form does not edit (`active`) through from the source record.

use crate::core::dialog::{EditForm, FormError, date_text, optional_text, parse_optional_date};
use crate::core::query::{ListQuery, encode_pairs};
use crate::core::resource::{Record, ResourceKind, SortColumn};
use roster_api_models::Student;

/// Sortable student table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudentColumn {
    /// First name (shown as the full name).
    FirstName,
    /// Email.
    Email,
    /// Class.
    StudentClass,
    /// Section.
    Section,
    /// Phone.
    Phone,
    /// Active flag.
    Active,
}

impl SortColumn for StudentColumn {
    const ALL: &'static [Self] = &[
        Self::FirstName,
        Self::Email,
        Self::StudentClass,
        Self::Section,
        Self::Phone,
        Self::Active,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Email => "email",
            Self::StudentClass => "studentClass",
            Self::Section => "section",
            Self::Phone => "phone",
            Self::Active => "active",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::FirstName => "Name",
            Self::Email => "Email",
            Self::StudentClass => "Class",
            Self::Section => "Section",
            Self::Phone => "Phone",
            Self::Active => "Status",
        }
    }
}

impl Record for Student {
    type Column = StudentColumn;
    const KIND: ResourceKind = ResourceKind::Students;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn is_active(&self) -> bool {
        self.active != Some(false)
    }

    fn display_name(&self) -> String {
        self.full_name()
    }
}

/// Student list query.
pub type StudentQuery = ListQuery<StudentColumn>;

/// Mutable student form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Phone.
    pub phone: String,
    /// Class.
    pub student_class: String,
    /// Section.
    pub section: String,
    /// Enrollment date, `YYYY-MM-DD`.
    pub enrollment_date: String,
    /// Active flag.
    pub active: bool,
}

impl Default for StudentForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            student_class: String::new(),
            section: String::new(),
            enrollment_date: String::new(),
            active: true,
        }
    }
}

impl EditForm for StudentForm {
    type Record = Student;

    fn from_record(record: &Student) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            student_class: record.student_class.clone().unwrap_or_default(),
            section: record.section.clone().unwrap_or_default(),
            enrollment_date: date_text(record.enrollment_date),
            active: record.is_active(),
        }
    }

    fn to_record(&self) -> Result<Student, FormError> {
        Ok(Student {
            id: None,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional_text(&self.phone),
            student_class: optional_text(&self.student_class),
            section: optional_text(&self.section),
            enrollment_date: parse_optional_date("Enrollment date", &self.enrollment_date)?,
            active: Some(self.active),
        })
    }
}

/// Query string for `GET /students/export/csv`: the search and status filter
/// only, never paging or sort.
#[must_use]
pub fn export_query(query: &StudentQuery) -> String {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    if !query.search.is_empty() {
        pairs.push(("search", query.search.as_str()));
    }
    if let Some(active) = query.status.active_param() {
        pairs.push(("active", if active { "true" } else { "false" }));
    }
    encode_pairs(pairs.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::{ListPatch, SortKey, StatusFilter};
    use chrono::NaiveDate;

    #[test]
    fn sort_keys_round_trip() {
        for column in StudentColumn::ALL {
            assert_eq!(StudentColumn::from_key(column.key()), Some(*column));
        }
        let query = StudentQuery::from_query_str("sortBy=studentClass&order=desc");
        assert_eq!(query.sort, SortKey::Column(StudentColumn::StudentClass));
    }

    #[test]
    fn missing_active_flag_reads_active() {
        let student = Student::default();
        assert!(student.is_active());
        let inactive = Student {
            active: Some(false),
            ..Student::default()
        };
        assert!(!inactive.is_active());
    }

    #[test]
    fn form_blank_optionals_become_none() {
        let form = StudentForm {
            first_name: " John ".into(),
            last_name: "Doe".into(),
            email: "john@test.com".into(),
            phone: "  ".into(),
            enrollment_date: "2024-09-01".into(),
            ..StudentForm::default()
        };
        let student = form.to_record().unwrap();
        assert_eq!(student.first_name, "John");
        assert_eq!(student.phone, None);
        assert_eq!(student.enrollment_date, NaiveDate::from_ymd_opt(2024, 9, 1));
        assert_eq!(student.active, Some(true));
    }

    #[test]
    fn form_copies_record_including_inactive_flag() {
        let student = Student {
            id: Some(2),
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane@test.com".into(),
            section: Some("B".into()),
            active: Some(false),
            ..Student::default()
        };
        let form = StudentForm::from_record(&student);
        assert_eq!(form.section, "B");
        assert!(!form.active);
        assert_eq!(form.to_record().unwrap().active, Some(false));
    }

    #[test]
    fn export_carries_search_but_not_all_status() {
        let query = StudentQuery::default()
            .apply(ListPatch::search("john"))
            .apply(ListPatch::page(3));
        assert_eq!(export_query(&query), "search=john");
        let inactive = query.apply(ListPatch::status(StatusFilter::Inactive));
        assert_eq!(export_query(&inactive), "search=john&active=false");
        assert_eq!(export_query(&StudentQuery::default()), "");
    }
}
