//! DTOs for the admin record-administration surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::staff::model::Staff;
use crate::modules::students::model::Student;

/// Which table an account-level action addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Student,
    Staff,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentListResponse {
    pub students: Vec<Student>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffListResponse {
    pub staff: Vec<Staff>,
}

/// Dashboard statistics. Revenue is computed from paid students at the
/// per-programme price, in naira.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_students: i64,
    pub pending_students: i64,
    pub active_students: i64,
    pub suspended_students: i64,
    pub total_staff: i64,
    pub active_staff: i64,
    pub pending_payments: i64,
    pub total_revenue: i64,
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ValidateStudentDto {
    /// Matriculation number of the student to validate.
    #[validate(length(min = 1))]
    pub student_id: String,
    /// `active` or `rejected`; anything else is a 400.
    #[validate(length(min = 1))]
    pub status: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidateStudentResponse {
    pub message: String,
    pub student: Student,
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct AccountActionDto {
    /// Business identifier: a matriculation number or staff id.
    #[validate(length(min = 1))]
    pub account_id: String,
    pub account_type: AccountType,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountActionResponse {
    pub message: String,
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct ClockInDto {
    #[validate(length(max = 200))]
    pub reason: Option<String>,
    #[validate(length(max = 200))]
    pub location: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ClockInResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateCodeResponse {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}
