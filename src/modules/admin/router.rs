use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::admin::controller::{
    clock_in, delete_account, generate_staff_code, get_stats, list_staff, list_students,
    suspend_account, validate_student,
};
use crate::state::AppState;

/// Routes in this router are gated by `require_admin` at the nest site.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students))
        .route("/staff", get(list_staff))
        .route("/stats", get(get_stats))
        .route("/students/validate", post(validate_student))
        .route("/suspend-account", post(suspend_account))
        .route("/delete-account", post(delete_account))
        .route("/clock-in", post(clock_in))
        .route("/staff/generate-code", post(generate_staff_code))
}
