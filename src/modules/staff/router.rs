use axum::{Router, routing::post};

use crate::modules::staff::controller::{login_staff, register_staff, verify_code};
use crate::state::AppState;

pub fn init_staff_router() -> Router<AppState> {
    Router::new()
        .route("/verify-code", post(verify_code))
        .route("/register", post(register_staff))
        .route("/login", post(login_staff))
}
