use chrono::Utc;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::metrics;
use crate::modules::auth::model::StaffLoginResponse;
use crate::modules::staff::model::{
    RegisterStaffDto, RegisterStaffResponse, Staff, StaffStatus, VerificationCode,
};
use crate::utils::errors::AppError;
use crate::utils::ids::generate_staff_id;
use crate::utils::jwt::create_staff_token;
use crate::utils::password::{hash_password, verify_password};

pub const STAFF_COLUMNS: &str = "id, staff_id, full_name, email, phone, department, position, \
     qualification, experience, employment_type, photo_url, location, status, \
     created_at, updated_at";

pub struct StaffService;

impl StaffService {
    /// Look up an unused staff code and check its expiry. Does not mark
    /// the code used; consumption happens inside [`Self::register`].
    #[instrument(skip(db))]
    pub async fn verify_code(db: &PgPool, code: &str) -> Result<VerificationCode, AppError> {
        let row = sqlx::query_as::<_, VerificationCode>(
            "SELECT id, code, code_type, created_by, used, expires_at, created_at
             FROM verification_codes
             WHERE code = $1 AND code_type = 'staff' AND used = FALSE",
        )
        .bind(code)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid or expired code".to_string()))?;

        if row.expires_at < Utc::now() {
            return Err(AppError::BadRequest("Code has expired".to_string()));
        }

        Ok(row)
    }

    /// Register a staff account. The verification code is consumed with a
    /// conditional update in the same transaction as the insert, so two
    /// racing registrations holding the same code cannot both succeed.
    #[instrument(skip(db, dto))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterStaffDto,
    ) -> Result<RegisterStaffResponse, AppError> {
        Self::verify_code(db, &dto.verification_code).await?;

        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM staff WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let staff_id = generate_staff_id();
        // Accounts start with a bcrypt hash of the email; staff change it
        // after first login.
        let initial_password = hash_password(&dto.email)?;

        let mut tx = db.begin().await?;

        let consumed: Option<(Uuid,)> = sqlx::query_as(
            "UPDATE verification_codes SET used = TRUE
             WHERE code = $1 AND code_type = 'staff' AND used = FALSE
             RETURNING id",
        )
        .bind(&dto.verification_code)
        .fetch_optional(&mut *tx)
        .await?;

        if consumed.is_none() {
            return Err(AppError::BadRequest(
                "Invalid verification code".to_string(),
            ));
        }

        sqlx::query(
            "INSERT INTO staff (staff_id, full_name, email, phone, department, position,
                 qualification, experience, employment_type, photo_url, location,
                 password, verification_code)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(&staff_id)
        .bind(&dto.full_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.department)
        .bind(&dto.position)
        .bind(&dto.qualification)
        .bind(&dto.experience)
        .bind(&dto.employment_type)
        .bind(&dto.photo_url)
        .bind(&dto.location)
        .bind(&initial_password)
        .bind(&dto.verification_code)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        metrics::track_staff_registered();
        metrics::track_code_consumed();

        Ok(RegisterStaffResponse {
            message: "Registration successful".to_string(),
            staff_id,
        })
    }

    #[instrument(skip(db, password, jwt_config))]
    pub async fn login(
        db: &PgPool,
        email: &str,
        password: &str,
        jwt_config: &JwtConfig,
    ) -> Result<StaffLoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct StaffWithPassword {
            id: Uuid,
            password: String,
            status: StaffStatus,
        }

        let row = sqlx::query_as::<_, StaffWithPassword>(
            "SELECT id, password, status FROM staff WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            metrics::track_login_failure("staff");
            AppError::Unauthorized("Invalid credentials".to_string())
        })?;

        if !verify_password(password, &row.password)? {
            metrics::track_login_failure("staff");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        if row.status != StaffStatus::Active {
            return Err(AppError::Forbidden("Account is not active".to_string()));
        }

        let user = sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff WHERE id = $1"
        ))
        .bind(row.id)
        .fetch_one(db)
        .await?;

        let token = create_staff_token(user.id, &user.email, jwt_config)?;
        metrics::track_login_success("staff");

        Ok(StaffLoginResponse { token, user })
    }
}
