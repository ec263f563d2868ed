use axum::{Router, routing::post};

use crate::modules::auth::controller::{login_admin, login_parent, login_student};
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/student/login", post(login_student))
        .route("/parent/login", post(login_parent))
        .route("/admin/login", post(login_admin))
}
