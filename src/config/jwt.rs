use std::env;

/// JWT signing configuration. Each principal gets its own token lifetime;
/// tokens are not refreshed, so the lifetime is the whole session.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub admin_token_expiry: i64,
    pub staff_token_expiry: i64,
    pub student_token_expiry: i64,
    pub parent_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            admin_token_expiry: env::var("JWT_ADMIN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(28800), // 8 hours
            staff_token_expiry: env::var("JWT_STAFF_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            student_token_expiry: env::var("JWT_STUDENT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(604800), // 7 days
            parent_token_expiry: env::var("JWT_PARENT_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(86400), // 24 hours
        }
    }
}
