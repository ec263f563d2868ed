use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{
    AdminClaims, Claims, ParentClaims, StaffClaims, StudentClaims,
};
use crate::utils::errors::AppError;

fn sign(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalError(format!("Failed to create token: {}", e)))
}

pub fn create_admin_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims::Admin(AdminClaims {
        email: email.to_string(),
        iat: now as usize,
        exp: (now + jwt_config.admin_token_expiry) as usize,
    });

    sign(&claims, jwt_config)
}

pub fn create_staff_token(
    id: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims::Staff(StaffClaims {
        sub: id.to_string(),
        email: email.to_string(),
        iat: now as usize,
        exp: (now + jwt_config.staff_token_expiry) as usize,
    });

    sign(&claims, jwt_config)
}

pub fn create_student_token(
    id: Uuid,
    email: &str,
    student_id: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims::Student(StudentClaims {
        sub: id.to_string(),
        email: email.to_string(),
        student_id: student_id.to_string(),
        iat: now as usize,
        exp: (now + jwt_config.student_token_expiry) as usize,
    });

    sign(&claims, jwt_config)
}

pub fn create_parent_token(
    student_id: &str,
    student_name: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims::Parent(ParentClaims {
        student_id: student_id.to_string(),
        student_name: student_name.to_string(),
        iat: now as usize,
        exp: (now + jwt_config.parent_token_expiry) as usize,
    });

    sign(&claims, jwt_config)
}

/// Decode and validate a token. Expiry failures are reported separately
/// from every other failure so clients can tell a stale session from a
/// bad token.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::TokenExpired,
        _ => AppError::InvalidToken,
    })
}
