//! Student domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Programme a student registers for. Stored as its display name
/// (`O-Level` / `A-Level`) in the `students.programme` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "programme")]
pub enum Programme {
    #[serde(rename = "O-Level")]
    #[sqlx(rename = "O-Level")]
    OLevel,
    #[serde(rename = "A-Level")]
    #[sqlx(rename = "A-Level")]
    ALevel,
}

/// Lifecycle of a student account. Registration creates `pending`
/// accounts; admins move them to `active` or `rejected`, and may suspend
/// later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "student_status", rename_all = "lowercase")]
pub enum StudentStatus {
    Pending,
    Active,
    Suspended,
    Rejected,
}

impl StudentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Pending => "pending",
            StudentStatus::Active => "active",
            StudentStatus::Suspended => "suspended",
            StudentStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

/// A student record. The password column is intentionally absent; queries
/// that need it use a module-local row type.
#[derive(Serialize, FromRow, Debug, ToSchema)]
pub struct Student {
    pub id: Uuid,
    /// Matriculation number, e.g. `MCAS/SCI/25/4QZ/O`.
    pub student_id: String,
    pub full_name: String,
    pub surname: String,
    pub email: String,
    pub phone: Option<String>,
    pub parents_phone: Option<String>,
    pub programme: Programme,
    pub department: String,
    pub subjects: Vec<String>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub status: StudentStatus,
    pub payment_status: PaymentStatus,
    pub registration_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public registration payload.
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct RegisterStudentDto {
    #[validate(length(min = 1, max = 100))]
    pub surname: String,
    #[validate(length(max = 100))]
    pub middle_name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 32))]
    pub phone: Option<String>,
    #[validate(length(max = 32))]
    pub parents_phone: Option<String>,
    pub programme: Programme,
    #[validate(length(min = 1, message = "at least one subject is required"))]
    pub subjects: Vec<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    /// Already-hosted photo; uploads happen outside this API.
    #[validate(url)]
    pub photo_url: Option<String>,
}

impl RegisterStudentDto {
    /// Full name as stored: surname, middle name and last name joined,
    /// skipping blanks.
    pub fn full_name(&self) -> String {
        let mut parts = vec![self.surname.trim()];
        if let Some(middle) = &self.middle_name {
            parts.push(middle.trim());
        }
        parts.push(self.last_name.trim());

        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterStudentResponse {
    pub message: String,
    pub student_id: String,
    pub status: StudentStatus,
    pub email: String,
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct UpdatePasswordDto {
    #[validate(length(min = 1))]
    pub current_password: String,
    #[validate(length(min = 8, message = "new password must be at least 8 characters"))]
    pub new_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
