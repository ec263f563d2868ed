use axum::Json;
use axum::extract::State;
use axum_extra::TypedHeader;
use axum_extra::headers::UserAgent;
use chrono::Utc;
use tracing::instrument;

use crate::middleware::role::AdminUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

use super::model::{
    AccountActionDto, AccountActionResponse, ClockInDto, ClockInResponse,
    GenerateCodeResponse, StaffListResponse, StatsResponse, StudentListResponse,
    ValidateStudentDto, ValidateStudentResponse,
};
use super::service::{AdminService, log_admin_action};

/// List every student, newest registration first
#[utoipa::path(
    get,
    path = "/api/admin/students",
    responses(
        (status = 200, description = "All student records", body = StudentListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<StudentListResponse>, AppError> {
    let students = AdminService::list_students(&state.db).await?;
    Ok(Json(StudentListResponse { students }))
}

/// List every staff member, newest first
#[utoipa::path(
    get,
    path = "/api/admin/staff",
    responses(
        (status = 200, description = "All staff records", body = StaffListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn list_staff(State(state): State<AppState>) -> Result<Json<StaffListResponse>, AppError> {
    let staff = AdminService::list_staff(&state.db).await?;
    Ok(Json(StaffListResponse { staff }))
}

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Aggregate counts and revenue", body = StatsResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state))]
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = AdminService::stats(&state.db).await?;
    Ok(Json(stats))
}

/// Activate or reject a pending student
#[utoipa::path(
    post,
    path = "/api/admin/students/validate",
    request_body = ValidateStudentDto,
    responses(
        (status = 200, description = "Student status updated", body = ValidateStudentResponse),
        (status = 400, description = "Invalid status value", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, admin, dto))]
pub async fn validate_student(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<ValidateStudentDto>,
) -> Result<Json<ValidateStudentResponse>, AppError> {
    let response = AdminService::validate_student(
        &state.db,
        &dto.student_id,
        &dto.status,
        &state.email_config,
    )
    .await?;

    log_admin_action(
        &state.db,
        &admin.email,
        "validate_student",
        Some(&format!("{} -> {}", dto.student_id, dto.status)),
        None,
        None,
    )
    .await;

    Ok(Json(response))
}

/// Suspend a student or staff account
#[utoipa::path(
    post,
    path = "/api/admin/suspend-account",
    request_body = AccountActionDto,
    responses(
        (status = 200, description = "Account suspended", body = AccountActionResponse),
        (status = 400, description = "Invalid account type", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, admin, dto))]
pub async fn suspend_account(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<AccountActionDto>,
) -> Result<Json<AccountActionResponse>, AppError> {
    AdminService::suspend_account(&state.db, &dto.account_id, dto.account_type).await?;

    log_admin_action(
        &state.db,
        &admin.email,
        "suspend_account",
        Some(&dto.account_id),
        None,
        None,
    )
    .await;

    Ok(Json(AccountActionResponse {
        message: "Account suspended successfully".to_string(),
    }))
}

/// Delete a student or staff account
#[utoipa::path(
    post,
    path = "/api/admin/delete-account",
    request_body = AccountActionDto,
    responses(
        (status = 200, description = "Account deleted", body = AccountActionResponse),
        (status = 400, description = "Invalid account type", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Account not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, admin, dto))]
pub async fn delete_account(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(dto): ValidatedJson<AccountActionDto>,
) -> Result<Json<AccountActionResponse>, AppError> {
    AdminService::delete_account(&state.db, &dto.account_id, dto.account_type).await?;

    log_admin_action(
        &state.db,
        &admin.email,
        "delete_account",
        Some(&dto.account_id),
        None,
        None,
    )
    .await;

    Ok(Json(AccountActionResponse {
        message: "Account deleted successfully".to_string(),
    }))
}

/// Record an admin clock-in
#[utoipa::path(
    post,
    path = "/api/admin/clock-in",
    request_body = ClockInDto,
    responses(
        (status = 200, description = "Clock-in recorded", body = ClockInResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, admin, dto))]
pub async fn clock_in(
    State(state): State<AppState>,
    admin: AdminUser,
    user_agent: Option<TypedHeader<UserAgent>>,
    ValidatedJson(dto): ValidatedJson<ClockInDto>,
) -> Result<Json<ClockInResponse>, AppError> {
    log_admin_action(
        &state.db,
        &admin.email,
        "clock_in",
        dto.reason.as_deref(),
        dto.location.as_deref(),
        user_agent.map(|TypedHeader(ua)| ua.to_string()).as_deref(),
    )
    .await;

    Ok(Json(ClockInResponse {
        message: "Clocked in successfully".to_string(),
        timestamp: Utc::now(),
    }))
}

/// Mint a staff verification code
#[utoipa::path(
    post,
    path = "/api/admin/staff/generate-code",
    responses(
        (status = 201, description = "Code generated", body = GenerateCodeResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument(skip(state, admin))]
pub async fn generate_staff_code(
    State(state): State<AppState>,
    admin: AdminUser,
) -> Result<(axum::http::StatusCode, Json<GenerateCodeResponse>), AppError> {
    let response = AdminService::generate_staff_code(&state.db, &admin.email).await?;

    log_admin_action(
        &state.db,
        &admin.email,
        "generate_staff_code",
        Some(&response.code),
        None,
        None,
    )
    .await;

    Ok((axum::http::StatusCode::CREATED, Json(response)))
}
