use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::{Claims, Role};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and provides the caller's
/// claims. A missing Authorization header and a header without the
/// `Bearer ` prefix are both rejected as [`AppError::MissingToken`];
/// decoding failures surface as expired or invalid.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn role(&self) -> Role {
        self.0.role()
    }

    pub fn email(&self) -> Option<&str> {
        self.0.email()
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::MissingToken)?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::{AdminClaims, ParentClaims, StudentClaims};

    #[test]
    fn exposes_role_and_email() {
        let auth_user = AuthUser(Claims::Student(StudentClaims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "ade@example.com".to_string(),
            student_id: "MCAS/SCI/25/ABC/O".to_string(),
            iat: 1234567890,
            exp: 9999999999,
        }));

        assert_eq!(auth_user.role(), Role::Student);
        assert_eq!(auth_user.email(), Some("ade@example.com"));
    }

    #[test]
    fn parent_claims_have_no_email() {
        let auth_user = AuthUser(Claims::Parent(ParentClaims {
            student_id: "MCAS/SCI/25/ABC/O".to_string(),
            student_name: "Ade Bello".to_string(),
            iat: 1234567890,
            exp: 9999999999,
        }));

        assert_eq!(auth_user.role(), Role::Parent);
        assert_eq!(auth_user.email(), None);
    }

    #[test]
    fn admin_claims_expose_email() {
        let auth_user = AuthUser(Claims::Admin(AdminClaims {
            email: "principal@school.edu".to_string(),
            iat: 1234567890,
            exp: 9999999999,
        }));

        assert_eq!(auth_user.role(), Role::Admin);
        assert_eq!(auth_user.email(), Some("principal@school.edu"));
    }
}
