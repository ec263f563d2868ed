use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

use super::model::{RegisterStaffDto, RegisterStaffResponse, VerifyCodeDto, VerifyCodeResponse};
use super::service::StaffService;
use crate::modules::auth::model::{StaffLoginRequest, StaffLoginResponse};

/// Pre-check a verification code before the registration form is shown
#[utoipa::path(
    post,
    path = "/api/staff/verify-code",
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Code is valid and unused", body = VerifyCodeResponse),
        (status = 400, description = "Unknown, used or expired code", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Staff"
)]
#[instrument(skip(state))]
pub async fn verify_code(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<VerifyCodeDto>,
) -> Result<Json<VerifyCodeResponse>, AppError> {
    let code = StaffService::verify_code(&state.db, &dto.code).await?;

    Ok(Json(VerifyCodeResponse {
        valid: true,
        message: "Code is valid".to_string(),
        expires_at: code.expires_at,
    }))
}

/// Register a staff account using an admin-issued verification code
#[utoipa::path(
    post,
    path = "/api/staff/register",
    request_body = RegisterStaffDto,
    responses(
        (status = 201, description = "Staff registered successfully", body = RegisterStaffResponse),
        (status = 400, description = "Duplicate email or bad verification code", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Staff"
)]
#[instrument(skip(state, dto))]
pub async fn register_staff(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterStaffDto>,
) -> Result<(StatusCode, Json<RegisterStaffResponse>), AppError> {
    let response = StaffService::register(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Staff login
#[utoipa::path(
    post,
    path = "/api/staff/login",
    request_body = StaffLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = StaffLoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 403, description = "Account is not active", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Staff"
)]
#[instrument(skip(state, dto))]
pub async fn login_staff(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<StaffLoginRequest>,
) -> Result<Json<StaffLoginResponse>, AppError> {
    let response =
        StaffService::login(&state.db, &dto.email, &dto.password, &state.jwt_config).await?;
    Ok(Json(response))
}
