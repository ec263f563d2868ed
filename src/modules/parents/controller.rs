use axum::Json;
use axum::extract::{Path, State};
use tracing::instrument;

use crate::middleware::role::ParentUser;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};

use super::model::ParentDashboardResponse;
use super::service::ParentService;

/// Parent dashboard for one student
///
/// A parent token is scoped to a single child; requesting any other
/// student is a 403 regardless of whether that student exists.
#[utoipa::path(
    get,
    path = "/api/parents/student/{student_id}",
    params(
        ("student_id" = String, Path, description = "Matriculation number (URL-encoded)")
    ),
    responses(
        (status = 200, description = "Student record with performance scaffold", body = ParentDashboardResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Token is not scoped to this student", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Parents"
)]
#[instrument(skip(state, claims))]
pub async fn get_student_dashboard(
    State(state): State<AppState>,
    ParentUser(claims): ParentUser,
    Path(student_id): Path<String>,
) -> Result<Json<ParentDashboardResponse>, AppError> {
    if claims.student_id != student_id {
        return Err(AppError::Forbidden(
            "Not authorized to view this student".to_string(),
        ));
    }

    let dashboard = ParentService::dashboard(&state.db, &student_id).await?;
    Ok(Json(dashboard))
}
