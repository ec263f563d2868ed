use sqlx::PgPool;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::config::email::EmailConfig;
use crate::metrics;
use crate::modules::students::model::{
    RegisterStudentDto, RegisterStudentResponse, Student, StudentStatus,
};
use crate::utils::email::EmailService;
use crate::utils::errors::AppError;
use crate::utils::ids::generate_student_id;
use crate::utils::password::{hash_password, verify_password};

pub const STUDENT_COLUMNS: &str = "id, student_id, full_name, surname, email, phone, \
     parents_phone, programme, department, subjects, photo_url, location, status, \
     payment_status, registration_date, updated_at";

/// All registrations currently land in the science department; the
/// original product never opened the other faculties.
const DEFAULT_DEPARTMENT: &str = "Science";

pub struct StudentService;

impl StudentService {
    /// Public registration. Creates a pending, unpaid account whose
    /// initial password is a bcrypt hash of the email address.
    #[instrument(skip(db, dto, email_config))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterStudentDto,
        email_config: &EmailConfig,
    ) -> Result<RegisterStudentResponse, AppError> {
        let existing: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM students WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let student_id = generate_student_id(DEFAULT_DEPARTMENT, &dto.programme);
        let full_name = dto.full_name();
        let initial_password = hash_password(&dto.email)?;

        sqlx::query(
            "INSERT INTO students (student_id, full_name, surname, email, phone, parents_phone,
                 programme, department, subjects, photo_url, location, password)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(&student_id)
        .bind(&full_name)
        .bind(dto.surname.trim())
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(&dto.parents_phone)
        .bind(dto.programme)
        .bind(DEFAULT_DEPARTMENT)
        .bind(&dto.subjects)
        .bind(&dto.photo_url)
        .bind(&dto.location)
        .bind(&initial_password)
        .execute(db)
        .await?;

        metrics::track_student_registered();

        let email_service = EmailService::new(email_config.clone());
        if let Err(e) = email_service
            .send_student_welcome_email(&dto.email, &full_name, &student_id)
            .await
        {
            warn!(error = ?e, email = %dto.email, "failed to send welcome email");
        }

        Ok(RegisterStudentResponse {
            message: "Registration successful".to_string(),
            student_id,
            status: StudentStatus::Pending,
            email: dto.email,
        })
    }

    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, id: Uuid) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Change a student's own password. The target account comes from the
    /// token claims, never from the request body.
    #[instrument(skip(db, current_password, new_password))]
    pub async fn update_password(
        db: &PgPool,
        id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT password FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;

        let (stored_hash,) =
            row.ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if !verify_password(current_password, &stored_hash)? {
            return Err(AppError::Unauthorized(
                "Current password is incorrect".to_string(),
            ));
        }

        let new_hash = hash_password(new_password)?;

        sqlx::query("UPDATE students SET password = $1, updated_at = NOW() WHERE id = $2")
            .bind(&new_hash)
            .bind(id)
            .execute(db)
            .await?;

        Ok(())
    }
}
