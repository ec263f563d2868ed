use axum::Json;
use axum::extract::State;
use axum_extra::TypedHeader;
use axum_extra::headers::UserAgent;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

use super::model::{
    AdminLoginRequest, AdminLoginResponse, ParentLoginRequest, ParentLoginResponse,
    StudentLoginRequest, StudentLoginResponse,
};
use super::service::AuthService;

/// Student login with email or matriculation number
#[utoipa::path(
    post,
    path = "/api/auth/student/login",
    request_body = StudentLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = StudentLoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<StudentLoginRequest>,
) -> Result<Json<StudentLoginResponse>, AppError> {
    let response =
        AuthService::login_student(&state.db, &dto.identifier, &dto.password, &state.jwt_config)
            .await?;
    Ok(Json(response))
}

/// Parent login with the child's matriculation number and surname
#[utoipa::path(
    post,
    path = "/api/auth/parent/login",
    request_body = ParentLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ParentLoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Student account is not active", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_parent(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ParentLoginRequest>,
) -> Result<Json<ParentLoginResponse>, AppError> {
    let response =
        AuthService::login_parent(&state.db, &dto.student_id, &dto.surname, &state.jwt_config)
            .await?;
    Ok(Json(response))
}

/// Admin login against the configured allow-list
#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AdminLoginResponse),
        (status = 401, description = "Invalid admin credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_admin(
    State(state): State<AppState>,
    user_agent: Option<TypedHeader<UserAgent>>,
    ValidatedJson(dto): ValidatedJson<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, AppError> {
    let response = AuthService::login_admin(
        &state.db,
        &dto.email,
        &dto.password,
        dto.location,
        user_agent.map(|TypedHeader(ua)| ua.to_string()),
        &state.jwt_config,
        &state.admin_config,
    )
    .await?;
    Ok(Json(response))
}
