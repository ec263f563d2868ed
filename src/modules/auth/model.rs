use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::staff::model::Staff;
use crate::modules::students::model::{Programme, Student, StudentStatus};

/// The four principals the API recognizes. There is no hierarchy between
/// them; every gate matches exactly one role (admin additionally accepts
/// allow-listed emails).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Student,
    Parent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::Student => "student",
            Role::Parent => "parent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// JWT claims. The payload is a sum over the four principals, tagged by the
// `role` field, so a handler can only touch the fields its role actually
// carries. `exp` and `iat` stay top-level in the encoded JSON, which is
// where the JWT library validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Claims {
    Admin(AdminClaims),
    Staff(StaffClaims),
    Student(StudentClaims),
    Parent(ParentClaims),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffClaims {
    pub sub: String, // staff row id
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentClaims {
    pub sub: String, // student row id
    pub email: String,
    /// Matriculation number, e.g. `MCAS/SCI/25/4QZ/O`.
    pub student_id: String,
    pub iat: usize,
    pub exp: usize,
}

/// Parent tokens are scoped to a single student; they carry no email and
/// no account id of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentClaims {
    pub student_id: String,
    pub student_name: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn role(&self) -> Role {
        match self {
            Claims::Admin(_) => Role::Admin,
            Claims::Staff(_) => Role::Staff,
            Claims::Student(_) => Role::Student,
            Claims::Parent(_) => Role::Parent,
        }
    }

    /// Email carried by the token, if the role has one.
    pub fn email(&self) -> Option<&str> {
        match self {
            Claims::Admin(c) => Some(&c.email),
            Claims::Staff(c) => Some(&c.email),
            Claims::Student(c) => Some(&c.email),
            Claims::Parent(_) => None,
        }
    }

    pub fn exp(&self) -> usize {
        match self {
            Claims::Admin(c) => c.exp,
            Claims::Staff(c) => c.exp,
            Claims::Student(c) => c.exp,
            Claims::Parent(c) => c.exp,
        }
    }

    pub fn iat(&self) -> usize {
        match self {
            Claims::Admin(c) => c.iat,
            Claims::Staff(c) => c.iat,
            Claims::Student(c) => c.iat,
            Claims::Parent(c) => c.iat,
        }
    }
}

// Login request structures

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StudentLoginRequest {
    /// Email address or matriculation number.
    #[validate(length(min = 1))]
    pub identifier: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StaffLoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ParentLoginRequest {
    /// The child's matriculation number.
    #[validate(length(min = 1))]
    pub student_id: String,
    #[validate(length(min = 1))]
    pub surname: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AdminLoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    /// Free-form location reported by the client, recorded in the audit log.
    #[validate(length(max = 200))]
    pub location: Option<String>,
}

// Login responses

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentLoginResponse {
    pub token: String,
    pub user: Student,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StaffLoginResponse {
    pub token: String,
    pub user: Staff,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminLoginResponse {
    pub token: String,
    pub user: AdminProfile,
}

/// Admins exist only in configuration, so this is the whole profile.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminProfile {
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParentLoginResponse {
    pub token: String,
    pub student: ParentStudentSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParentStudentSummary {
    pub student_id: String,
    pub full_name: String,
    pub programme: Programme,
    pub department: String,
    pub status: StudentStatus,
}
