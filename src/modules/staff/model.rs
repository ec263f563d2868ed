//! Staff domain models and DTOs, plus the verification-code row that
//! gates staff registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Staff accounts are active as soon as registration succeeds; only an
/// admin suspension changes that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "staff_status", rename_all = "lowercase")]
pub enum StaffStatus {
    Active,
    Suspended,
}

impl StaffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffStatus::Active => "active",
            StaffStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A staff record. The password column is never selected into this type.
#[derive(Serialize, FromRow, Debug, ToSchema)]
pub struct Staff {
    pub id: Uuid,
    /// Generated identifier, e.g. `STF_1736949123456_A7C2QX`.
    pub staff_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department: String,
    pub position: String,
    pub qualification: Option<String>,
    pub experience: Option<String>,
    pub employment_type: Option<String>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub status: StaffStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One-time onboarding code row.
#[derive(FromRow, Debug)]
pub struct VerificationCode {
    pub id: Uuid,
    pub code: String,
    pub code_type: String,
    pub created_by: String,
    pub used: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct VerifyCodeDto {
    #[validate(length(min = 1))]
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyCodeResponse {
    pub valid: bool,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

/// Staff registration payload. The verification code is consumed in the
/// same transaction that inserts the account.
#[derive(Deserialize, Debug, ToSchema, Validate)]
pub struct RegisterStaffDto {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 32))]
    pub phone: String,
    #[validate(length(min = 1, max = 100))]
    pub department: String,
    #[validate(length(min = 1, max = 100))]
    pub position: String,
    #[validate(length(min = 1, max = 200))]
    pub qualification: String,
    #[validate(length(max = 200))]
    pub experience: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub employment_type: String,
    #[validate(length(max = 200))]
    pub location: Option<String>,
    /// Already-hosted photo; uploads happen outside this API.
    #[validate(url)]
    pub photo_url: Option<String>,
    #[validate(length(min = 1))]
    pub verification_code: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterStaffResponse {
    pub message: String,
    pub staff_id: String,
}
