use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::require_student;
use crate::modules::students::controller::{get_profile, register_student, update_password};
use crate::state::AppState;

pub fn init_students_router(state: AppState) -> Router<AppState> {
    // Registration is public; the profile route authenticates any
    // principal through its extractor; password changes are student-only.
    let student_only = Router::new()
        .route("/update-password", post(update_password))
        .route_layer(middleware::from_fn_with_state(state, require_student));

    Router::new()
        .route("/register", post(register_student))
        .route("/profile/{id}", get(get_profile))
        .merge(student_only)
}
