//! Staff feature state.
//!
//! # Design
//! - Keep form inputs as strings for lossless editing.
//! - Salary is parsed on submit and must be a non-negative number.

use crate::core::dialog::{
    EditForm, FormError, date_text, optional_text, parse_optional_amount, parse_optional_date,
};
use crate::core::query::ListQuery;
use crate::core::resource::{Record, ResourceKind, SortColumn};
use roster_api_models::Staff;

/// Sortable staff table columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StaffColumn {
    /// First name (shown as the full name).
    FirstName,
    /// Email.
    Email,
    /// Department.
    Department,
    /// Position.
    Position,
    /// Phone.
    Phone,
    /// Active flag.
    Active,
}

impl SortColumn for StaffColumn {
    const ALL: &'static [Self] = &[
        Self::FirstName,
        Self::Email,
        Self::Department,
        Self::Position,
        Self::Phone,
        Self::Active,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::Email => "email",
            Self::Department => "department",
            Self::Position => "position",
            Self::Phone => "phone",
            Self::Active => "active",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::FirstName => "Name",
            Self::Email => "Email",
            Self::Department => "Department",
            Self::Position => "Position",
            Self::Phone => "Phone",
            Self::Active => "Status",
        }
    }
}

impl Record for Staff {
    type Column = StaffColumn;
    const KIND: ResourceKind = ResourceKind::Staff;

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

/// Staff list query.
pub type StaffQuery = ListQuery<StaffColumn>;

/// Mutable staff form state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaffForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email.
    pub email: String,
    /// Phone.
    pub phone: String,
    /// Department.
    pub department: String,
    /// Position.
    pub position: String,
    /// Join date, `YYYY-MM-DD`.
    pub join_date: String,
    /// Salary as typed.
    pub salary: String,
    /// Qualification.
    pub qualification: String,
    /// Address.
    pub address: String,
    /// Active flag.
    pub active: bool,
}

impl Default for StaffForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            department: String::new(),
            position: String::new(),
            join_date: String::new(),
            salary: String::new(),
            qualification: String::new(),
            address: String::new(),
            active: true,
        }
    }
}

impl EditForm for StaffForm {
    type Record = Staff;

    fn from_record(record: &Staff) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone().unwrap_or_default(),
            department: record.department.clone().unwrap_or_default(),
            position: record.position.clone().unwrap_or_default(),
            join_date: date_text(record.join_date),
            salary: record.salary.map(|salary| salary.to_string()).unwrap_or_default(),
            qualification: record.qualification.clone().unwrap_or_default(),
            address: record.address.clone().unwrap_or_default(),
            active: record.is_active(),
        }
    }

    fn to_record(&self) -> Result<Staff, FormError> {
        Ok(Staff {
            id: None,
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional_text(&self.phone),
            department: optional_text(&self.department),
            position: optional_text(&self.position),
            join_date: parse_optional_date("Join date", &self.join_date)?,
            active: Some(self.active),
            salary: parse_optional_amount("Salary", &self.salary)?,
            qualification: optional_text(&self.qualification),
            address: optional_text(&self.address),
        })
    }
}

/// Salary cell text, e.g. `52,000.50`; empty when unset.
#[must_use]
pub fn format_salary(salary: Option<f64>) -> String {
    let Some(salary) = salary else {
        return String::new();
    };
    let fixed = format!("{salary:.2}");
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let digits: Vec<char> = whole.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    if cents == "00" {
        grouped
    } else {
        format!("{grouped}.{cents}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_must_be_a_non_negative_number() {
        let mut form = StaffForm {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@test.com".into(),
            salary: "5200.5".into(),
            ..StaffForm::default()
        };
        assert_eq!(form.to_record().unwrap().salary, Some(5200.5));
        form.salary = "-3".into();
        assert_eq!(
            form.to_record(),
            Err(FormError::InvalidNumber { field: "Salary" })
        );
    }

    #[test]
    fn record_round_trips_through_form() {
        let staff = Staff {
            id: Some(4),
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: "alan@test.com".into(),
            department: Some("Math".into()),
            salary: Some(61000.0),
            active: Some(false),
            ..Staff::default()
        };
        let form = StaffForm::from_record(&staff);
        assert_eq!(form.salary, "61000");
        let record = form.to_record().unwrap();
        assert_eq!(record.department.as_deref(), Some("Math"));
        assert_eq!(record.salary, Some(61000.0));
        assert_eq!(record.active, Some(false));
        assert_eq!(record.id, None);
    }

    #[test]
    fn new_form_defaults_to_active() {
        assert!(StaffForm::default().active);
        assert_eq!(StaffForm::default().to_record().unwrap().salary, None);
    }

    #[test]
    fn salary_cells_group_thousands() {
        assert_eq!(format_salary(None), "");
        assert_eq!(format_salary(Some(950.0)), "950");
        assert_eq!(format_salary(Some(52000.5)), "52,000.50");
        assert_eq!(format_salary(Some(1_234_567.0)), "1,234,567");
    }
}
