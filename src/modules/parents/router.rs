use axum::{Router, routing::get};

use crate::modules::parents::controller::get_student_dashboard;
use crate::state::AppState;

/// Routes in this router are gated by `require_parent` at the nest site.
pub fn init_parents_router() -> Router<AppState> {
    Router::new().route("/student/{student_id}", get(get_student_dashboard))
}
