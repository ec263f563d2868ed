use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use registra::config::admins::{AdminConfig, AdminCredential};
use registra::config::cors::CorsConfig;
use registra::config::email::EmailConfig;
use registra::config::jwt::JwtConfig;
use registra::config::rate_limit::RateLimitConfig;
use registra::modules::staff::model::StaffStatus;
use registra::modules::students::model::{Programme, StudentStatus};
use registra::state::AppState;
use registra::utils::password::hash_password;

/// The one allow-listed admin every test state carries.
pub const ADMIN_EMAIL: &str = "principal@meritcollege.edu.ng";
pub const ADMIN_PASSWORD: &str = "admin-password-123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        admin_token_expiry: 28800,
        staff_token_expiry: 604800,
        student_token_expiry: 604800,
        parent_token_expiry: 86400,
    }
}

/// App state with email sending and rate limiting disabled, and a fixed
/// admin allow-list.
pub fn test_state(pool: PgPool) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        admin_config: AdminConfig {
            admins: vec![AdminCredential {
                email: ADMIN_EMAIL.to_string(),
                password_hash: hash_password(ADMIN_PASSWORD).unwrap(),
            }],
        },
        email_config: EmailConfig {
            enabled: false,
            smtp_host: "localhost".to_string(),
            smtp_port: 1025,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_email: "noreply@meritcollege.edu.ng".to_string(),
            from_name: "Merit College".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
        rate_limit_config: RateLimitConfig {
            enabled: false,
            ..Default::default()
        },
    }
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

pub fn generate_unique_student_id() -> String {
    let discriminator = Uuid::new_v4().simple().to_string()[..3].to_uppercase();
    format!("MCAS/SCI/25/{}/O", discriminator)
}

#[allow(dead_code)]
pub struct TestStudent {
    pub id: Uuid,
    pub student_id: String,
    pub email: String,
    pub password: String,
    pub surname: String,
    pub full_name: String,
}

#[allow(dead_code)]
pub async fn create_test_student(
    pool: &PgPool,
    email: &str,
    password: &str,
    status: StudentStatus,
) -> TestStudent {
    let hashed = hash_password(password).unwrap();
    let student_id = generate_unique_student_id();
    let surname = "Bello";
    let full_name = "Bello Ade Test";

    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO students (student_id, full_name, surname, email, programme,
             department, subjects, password, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id",
    )
    .bind(&student_id)
    .bind(full_name)
    .bind(surname)
    .bind(email)
    .bind(Programme::OLevel)
    .bind("Science")
    .bind(vec![
        "Mathematics".to_string(),
        "English".to_string(),
        "Physics".to_string(),
    ])
    .bind(&hashed)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap();

    TestStudent {
        id,
        student_id,
        email: email.to_string(),
        password: password.to_string(),
        surname: surname.to_string(),
        full_name: full_name.to_string(),
    }
}

#[allow(dead_code)]
pub struct TestStaff {
    pub id: Uuid,
    pub staff_id: String,
    pub email: String,
    pub password: String,
}

#[allow(dead_code)]
pub async fn create_test_staff(
    pool: &PgPool,
    email: &str,
    password: &str,
    status: StaffStatus,
) -> TestStaff {
    let hashed = hash_password(password).unwrap();
    let staff_id = format!(
        "STF_{}_{}",
        Utc::now().timestamp_millis(),
        &Uuid::new_v4().simple().to_string()[..6].to_uppercase()
    );

    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO staff (staff_id, full_name, email, department, position, password, status)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING id",
    )
    .bind(&staff_id)
    .bind("Test Staff")
    .bind(email)
    .bind("Science")
    .bind("Teacher")
    .bind(&hashed)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap();

    TestStaff {
        id,
        staff_id,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[allow(dead_code)]
pub async fn create_test_code(pool: &PgPool, code: &str, used: bool, expires_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO verification_codes (code, code_type, created_by, used, expires_at)
         VALUES ($1, 'staff', $2, $3, $4)",
    )
    .bind(code)
    .bind(ADMIN_EMAIL)
    .bind(used)
    .bind(expires_at)
    .execute(pool)
    .await
    .unwrap();
}
