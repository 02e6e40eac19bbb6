#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Roster records API.
//!
//! These types mirror the JSON contract of the `/auth`, `/students` and
//! `/staff` endpoints. Field names are camelCase on the wire; optional fields
//! are skipped when absent so create/update payloads stay minimal.
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Student record as exchanged with `/students`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Server identifier; absent until the record has been created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email (unique server-side).
    pub email: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Class or grade label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_class: Option<String>,
    /// Section within the class.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    /// Enrollment date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrollment_date: Option<NaiveDate>,
    /// Active flag; absent is treated as active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl Student {
    /// Display name combining first and last names.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Staff record as exchanged with `/staff`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    /// Server identifier; absent until the record has been created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email (unique server-side).
    pub email: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Department name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Join date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    /// Active flag; absent is treated as active.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Salary amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    /// Highest qualification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    /// Postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Staff {
    /// Display name combining first and last names.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One page of a server-side paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    /// Rows on this page, in server order.
    pub content: Vec<T>,
    /// Number of pages for the current filter.
    pub total_pages: u32,
    /// Number of matching rows across all pages.
    pub total_elements: u64,
    /// Zero-based page index.
    pub number: u32,
    /// Requested page size.
    pub size: u32,
}

/// `POST /auth/login` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// `POST /auth/register` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Token plus profile returned by login and register.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Role label (e.g. `ADMIN`).
    pub role: String,
}

/// Body for `POST /{resource}/bulk/*`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkRequest {
    /// Target identifiers.
    pub ids: Vec<i64>,
}

/// Acknowledgement body returned by bulk delete/activate/deactivate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    /// Server summary such as `Deleted 3 students`.
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of `POST /students/bulk/send-invite`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BulkInviteResult {
    /// Optional server summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Invites delivered.
    #[serde(default)]
    pub sent: u32,
    /// Invites that could not be delivered.
    #[serde(default)]
    pub failed: u32,
    /// Per-recipient failure messages.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Result of `GET /students/stats`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentStats {
    /// All students.
    pub total: u64,
    /// Active students.
    pub active: u64,
    /// Inactive students.
    pub inactive: u64,
}

/// Result of `POST /students/import/csv`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportResult {
    /// Rows created.
    #[serde(default)]
    pub imported: u32,
    /// Rows rejected.
    #[serde(default)]
    pub failed: u32,
    /// Per-row rejection messages.
    #[serde(default)]
    pub errors: Vec<String>,
}

/// Error envelope returned by the API on 4xx/5xx.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable error summary.
    #[serde(default)]
    pub error: Option<String>,
    /// HTTP status echoed by the server.
    #[serde(default)]
    pub status: Option<u16>,
    /// Server timestamp.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Field-level validation messages keyed by field name.
    #[serde(default)]
    pub details: Option<BTreeMap<String, String>>,
}

impl ErrorBody {
    /// Non-empty error message, if the server sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(str::trim)
            .filter(|message| !message.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn student_decodes_camel_case_and_nulls() {
        let student: Student = serde_json::from_value(json!({
            "id": 1,
            "firstName": "John",
            "lastName": "Doe",
            "email": "john@test.com",
            "phone": null,
            "studentClass": "10",
            "section": "A",
            "enrollmentDate": "2024-09-01",
            "active": true
        }))
        .expect("student decodes");
        assert_eq!(student.id, Some(1));
        assert_eq!(student.student_class.as_deref(), Some("10"));
        assert_eq!(student.phone, None);
        assert_eq!(
            student.enrollment_date,
            NaiveDate::from_ymd_opt(2024, 9, 1)
        );
        assert_eq!(student.full_name(), "John Doe");
    }

    #[test]
    fn new_student_omits_absent_fields() {
        let student = Student {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@test.com".into(),
            ..Student::default()
        };
        let value = serde_json::to_value(&student).expect("encode");
        assert_eq!(
            value,
            json!({"firstName": "Ada", "lastName": "Lovelace", "email": "ada@test.com"})
        );
    }

    #[test]
    fn staff_salary_and_join_date_serialize() {
        let staff = Staff {
            id: Some(7),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: "grace@test.com".into(),
            join_date: NaiveDate::from_ymd_opt(2020, 1, 15),
            salary: Some(5200.5),
            ..Staff::default()
        };
        let value = serde_json::to_value(&staff).expect("encode");
        assert_eq!(value["joinDate"], "2020-01-15");
        assert_eq!(value["salary"], 5200.5);
        assert!(value.get("department").is_none());
    }

    #[test]
    fn page_response_ignores_extra_spring_fields() {
        let page: PageResponse<Student> = serde_json::from_value(json!({
            "content": [
                {"id": 1, "firstName": "John", "lastName": "Doe", "email": "john@test.com", "active": true},
                {"id": 2, "firstName": "Jane", "lastName": "Smith", "email": "jane@test.com", "active": false}
            ],
            "totalPages": 1,
            "totalElements": 2,
            "number": 0,
            "size": 10,
            "pageable": {"pageNumber": 0},
            "first": true
        }))
        .expect("page decodes");
        assert_eq!(page.total_elements, 2);
        assert_eq!(page.content[1].active, Some(false));
    }

    #[test]
    fn import_result_matches_server_shape() {
        let result: ImportResult = serde_json::from_value(json!({
            "imported": 3,
            "failed": 1,
            "errors": ["Row 4: firstName and email are required"]
        }))
        .expect("import decodes");
        assert_eq!(result.imported, 3);
        assert_eq!(result.failed, 1);
        assert_eq!(result.errors, vec!["Row 4: firstName and email are required"]);
    }

    #[test]
    fn invite_rejection_body_carries_counts() {
        let body: ErrorBody = serde_json::from_value(json!({
            "error": "No active students in selection",
            "sent": 0,
            "failed": 0
        }))
        .expect("error decodes");
        assert_eq!(body.message(), Some("No active students in selection"));
    }

    #[test]
    fn error_body_blank_message_is_none() {
        let body = ErrorBody {
            error: Some("   ".into()),
            ..ErrorBody::default()
        };
        assert_eq!(body.message(), None);
    }

    #[test]
    fn validation_error_details_decode() {
        let body: ErrorBody = serde_json::from_value(json!({
            "timestamp": "2025-01-01T00:00:00",
            "status": 400,
            "error": "Validation Failed",
            "details": {"email": "Invalid email format"}
        }))
        .expect("validation decodes");
        assert_eq!(body.status, Some(400));
        assert_eq!(
            body.details
                .as_ref()
                .and_then(|details| details.get("email"))
                .map(String::as_str),
            Some("Invalid email format")
        );
    }
}
