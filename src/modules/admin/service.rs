use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::{instrument, warn};

use crate::config::email::EmailConfig;
use crate::metrics;
use crate::modules::admin::model::{
    AccountType, GenerateCodeResponse, StatsResponse, ValidateStudentResponse,
};
use crate::modules::staff::model::Staff;
use crate::modules::staff::service::STAFF_COLUMNS;
use crate::modules::students::model::{Student, StudentStatus};
use crate::modules::students::service::STUDENT_COLUMNS;
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_verification_code;

/// Fee per programme, in naira. Only paid students count towards revenue.
const O_LEVEL_FEE: i64 = 10_000;
const A_LEVEL_FEE: i64 = 25_750;

/// Staff verification codes expire six hours after they are minted.
const CODE_LIFETIME_HOURS: i64 = 6;

/// Append a row to the admin audit trail. Best-effort: a failed write is
/// logged and swallowed, the triggering action succeeds regardless.
pub async fn log_admin_action(
    db: &PgPool,
    admin_email: &str,
    action: &str,
    details: Option<&str>,
    location: Option<&str>,
    user_agent: Option<&str>,
) {
    let result = sqlx::query(
        "INSERT INTO admin_logs (admin_email, action, details, location, user_agent)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(admin_email)
    .bind(action)
    .bind(details)
    .bind(location)
    .bind(user_agent)
    .execute(db)
    .await;

    if let Err(e) = result {
        warn!(error = %e, admin_email, action, "failed to write admin log");
    }
}

pub struct AdminService;

impl AdminService {
    #[instrument(skip(db))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY registration_date DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn list_staff(db: &PgPool) -> Result<Vec<Staff>, AppError> {
        let staff = sqlx::query_as::<_, Staff>(&format!(
            "SELECT {STAFF_COLUMNS} FROM staff ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(staff)
    }

    #[instrument(skip(db))]
    pub async fn stats(db: &PgPool) -> Result<StatsResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct StudentCounts {
            total: i64,
            pending: i64,
            active: i64,
            suspended: i64,
            unpaid: i64,
            paid_o_level: i64,
            paid_a_level: i64,
        }

        let s = sqlx::query_as::<_, StudentCounts>(
            "SELECT
                 COUNT(*) AS total,
                 COUNT(*) FILTER (WHERE status = 'pending') AS pending,
                 COUNT(*) FILTER (WHERE status = 'active') AS active,
                 COUNT(*) FILTER (WHERE status = 'suspended') AS suspended,
                 COUNT(*) FILTER (WHERE payment_status = 'unpaid') AS unpaid,
                 COUNT(*) FILTER (WHERE payment_status = 'paid' AND programme = 'O-Level')
                     AS paid_o_level,
                 COUNT(*) FILTER (WHERE payment_status = 'paid' AND programme = 'A-Level')
                     AS paid_a_level
             FROM students",
        )
        .fetch_one(db)
        .await?;

        #[derive(sqlx::FromRow)]
        struct StaffCounts {
            total: i64,
            active: i64,
        }

        let t = sqlx::query_as::<_, StaffCounts>(
            "SELECT
                 COUNT(*) AS total,
                 COUNT(*) FILTER (WHERE status = 'active') AS active
             FROM staff",
        )
        .fetch_one(db)
        .await?;

        Ok(StatsResponse {
            total_students: s.total,
            pending_students: s.pending,
            active_students: s.active,
            suspended_students: s.suspended,
            total_staff: t.total,
            active_staff: t.active,
            pending_payments: s.unpaid,
            total_revenue: s.paid_o_level * O_LEVEL_FEE + s.paid_a_level * A_LEVEL_FEE,
        })
    }

    /// Move a pending student to `active` or `rejected`. Activation sends
    /// a best-effort notification mail.
    #[instrument(skip(db, email_config))]
    pub async fn validate_student(
        db: &PgPool,
        student_id: &str,
        status: &str,
        email_config: &EmailConfig,
    ) -> Result<ValidateStudentResponse, AppError> {
        let new_status = match status {
            "active" => StudentStatus::Active,
            "rejected" => StudentStatus::Rejected,
            _ => {
                return Err(AppError::BadRequest(
                    "Invalid status. Must be 'active' or 'rejected'".to_string(),
                ));
            }
        };

        let student = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET status = $1, updated_at = NOW()
             WHERE student_id = $2
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(new_status)
        .bind(student_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if new_status == StudentStatus::Active {
            let email_service = EmailService::new(email_config.clone());
            if let Err(e) = email_service
                .send_account_validated_email(&student.email, &student.full_name)
                .await
            {
                warn!(error = ?e, email = %student.email, "failed to send validation email");
            }
        }

        let message = match new_status {
            StudentStatus::Active => "Student activated successfully",
            _ => "Student rejected",
        };

        Ok(ValidateStudentResponse {
            message: message.to_string(),
            student,
        })
    }

    #[instrument(skip(db))]
    pub async fn suspend_account(
        db: &PgPool,
        account_id: &str,
        account_type: AccountType,
    ) -> Result<(), AppError> {
        let result = match account_type {
            AccountType::Student => {
                sqlx::query(
                    "UPDATE students SET status = 'suspended', updated_at = NOW()
                     WHERE student_id = $1",
                )
                .bind(account_id)
                .execute(db)
                .await?
            }
            AccountType::Staff => {
                sqlx::query(
                    "UPDATE staff SET status = 'suspended', updated_at = NOW()
                     WHERE staff_id = $1",
                )
                .bind(account_id)
                .execute(db)
                .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn delete_account(
        db: &PgPool,
        account_id: &str,
        account_type: AccountType,
    ) -> Result<(), AppError> {
        let result = match account_type {
            AccountType::Student => {
                sqlx::query("DELETE FROM students WHERE student_id = $1")
                    .bind(account_id)
                    .execute(db)
                    .await?
            }
            AccountType::Staff => {
                sqlx::query("DELETE FROM staff WHERE staff_id = $1")
                    .bind(account_id)
                    .execute(db)
                    .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        Ok(())
    }

    /// Mint a fresh staff verification code, valid for six hours.
    #[instrument(skip(db))]
    pub async fn generate_staff_code(
        db: &PgPool,
        created_by: &str,
    ) -> Result<GenerateCodeResponse, AppError> {
        let code = generate_verification_code();
        let expires_at = Utc::now() + Duration::hours(CODE_LIFETIME_HOURS);

        sqlx::query(
            "INSERT INTO verification_codes (code, code_type, created_by, expires_at)
             VALUES ($1, 'staff', $2, $3)",
        )
        .bind(&code)
        .bind(created_by)
        .bind(expires_at)
        .execute(db)
        .await?;

        metrics::track_code_generated();

        Ok(GenerateCodeResponse { code, expires_at })
    }
}
