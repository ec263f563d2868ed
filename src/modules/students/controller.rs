use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::StudentUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

use super::model::{
    MessageResponse, RegisterStudentDto, RegisterStudentResponse, Student, UpdatePasswordDto,
};
use super::service::StudentService;

/// Public student registration
#[utoipa::path(
    post,
    path = "/api/students/register",
    request_body = RegisterStudentDto,
    responses(
        (status = 201, description = "Registration successful, account pending validation", body = RegisterStudentResponse),
        (status = 400, description = "Duplicate email or missing fields", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state, dto))]
pub async fn register_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterStudentDto>,
) -> Result<(StatusCode, Json<RegisterStudentResponse>), AppError> {
    let response = StudentService::register(&state.db, dto, &state.email_config).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Fetch a student profile by row id
#[utoipa::path(
    get,
    path = "/api/students/profile/{id}",
    params(
        ("id" = Uuid, Path, description = "Student row id")
    ),
    responses(
        (status = 200, description = "Student profile", body = Student),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, _auth_user))]
pub async fn get_profile(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Student>, AppError> {
    let student = StudentService::get_profile(&state.db, id).await?;
    Ok(Json(student))
}

/// Change the calling student's password
#[utoipa::path(
    post,
    path = "/api/students/update-password",
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password updated", body = MessageResponse),
        (status = 401, description = "Wrong current password or bad token", body = ErrorResponse),
        (status = 403, description = "Not a student token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Students"
)]
#[instrument(skip(state, claims, dto))]
pub async fn update_password(
    State(state): State<AppState>,
    StudentUser(claims): StudentUser,
    ValidatedJson(dto): ValidatedJson<UpdatePasswordDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    StudentService::update_password(&state.db, id, &dto.current_password, &dto.new_password)
        .await?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".to_string(),
    }))
}
