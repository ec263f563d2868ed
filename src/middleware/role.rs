//! Role-based authorization for Axum.
//!
//! Two complementary approaches:
//! 1. Layer middleware (`require_admin`, `require_staff`, ...) applied to
//!    whole route groups with `middleware::from_fn_with_state`.
//! 2. Typed extractors (`AdminUser`, `StudentUser`, ...) for handlers that
//!    need the fields a specific role carries.
//!
//! Roles match exactly; there is no hierarchy. The admin gate is the one
//! exception: it passes a token whose role is `admin` or whose email is on
//! the configured allow-list. Authentication failures (missing, expired,
//! invalid tokens) keep their 401 shape; only role mismatches become 403s.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::admins::AdminConfig;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::model::{Claims, ParentClaims, Role, StaffClaims, StudentClaims};
use crate::state::AppState;
use crate::utils::errors::AppError;

fn access_required(role: Role) -> AppError {
    let message = match role {
        Role::Admin => "Admin access required",
        Role::Staff => "Staff access required",
        Role::Student => "Student access required",
        Role::Parent => "Parent access required",
    };
    AppError::Forbidden(message.to_string())
}

/// Check that the caller holds exactly the expected role.
pub fn check_role(auth_user: &AuthUser, expected: Role) -> Result<(), AppError> {
    if auth_user.role() == expected {
        Ok(())
    } else {
        Err(access_required(expected))
    }
}

/// Admin check: an `admin` role claim passes, and so does any token whose
/// email is on the allow-list. Either condition alone is sufficient.
pub fn check_admin(auth_user: &AuthUser, admin_config: &AdminConfig) -> Result<(), AppError> {
    if auth_user.role() == Role::Admin {
        return Ok(());
    }

    match auth_user.email() {
        Some(email) if admin_config.is_allowlisted(email) => Ok(()),
        _ => Err(access_required(Role::Admin)),
    }
}

async fn require_role(
    state: AppState,
    req: Request,
    next: Next,
    expected: Role,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    if expected == Role::Admin {
        check_admin(&auth_user, &state.admin_config)?;
    } else {
        check_role(&auth_user, expected)?;
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Gate a route group to admins.
///
/// ```rust,ignore
/// let admin_routes = init_admin_router()
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, Role::Admin).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_staff(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, Role::Staff).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, Role::Student).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

pub async fn require_parent(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_role(state, req, next, Role::Parent).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor for handlers on admin routes that need the acting admin's
/// identity (audit logging). Carries the email the gate accepted.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub email: String,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_admin(&auth_user, &state.admin_config)?;

        // check_admin only passes claims that carry an email
        let email = auth_user
            .email()
            .ok_or_else(|| access_required(Role::Admin))?
            .to_string();

        Ok(AdminUser { email })
    }
}

#[derive(Debug, Clone)]
pub struct StaffUser(pub StaffClaims);

impl FromRequestParts<AppState> for StaffUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        match auth_user.0 {
            Claims::Staff(claims) => Ok(StaffUser(claims)),
            _ => Err(access_required(Role::Staff)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StudentUser(pub StudentClaims);

impl FromRequestParts<AppState> for StudentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        match auth_user.0 {
            Claims::Student(claims) => Ok(StudentUser(claims)),
            _ => Err(access_required(Role::Student)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParentUser(pub ParentClaims);

impl FromRequestParts<AppState> for ParentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        match auth_user.0 {
            Claims::Parent(claims) => Ok(ParentUser(claims)),
            _ => Err(access_required(Role::Parent)),
        }
    }
}
