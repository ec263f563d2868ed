use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::config::admins::AdminConfig;
use crate::config::jwt::JwtConfig;
use crate::metrics;
use crate::modules::admin::service::log_admin_action;
use crate::modules::auth::model::{
    AdminLoginResponse, AdminProfile, ParentLoginResponse, ParentStudentSummary, Role,
    StudentLoginResponse,
};
use crate::modules::students::model::{Student, StudentStatus};
use crate::modules::students::service::STUDENT_COLUMNS;
use crate::utils::errors::AppError;
use crate::utils::jwt::{create_admin_token, create_parent_token, create_student_token};
use crate::utils::password::verify_password;

pub struct AuthService;

impl AuthService {
    /// Student login. The identifier matches either the email or the
    /// matriculation number. Any account status may authenticate; the
    /// dashboard surfaces pending or suspended state to the student.
    #[instrument(skip(db, password, jwt_config))]
    pub async fn login_student(
        db: &PgPool,
        identifier: &str,
        password: &str,
        jwt_config: &JwtConfig,
    ) -> Result<StudentLoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct StudentWithPassword {
            id: Uuid,
            password: String,
        }

        let row = sqlx::query_as::<_, StudentWithPassword>(
            "SELECT id, password FROM students WHERE email = $1 OR student_id = $1",
        )
        .bind(identifier)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            metrics::track_login_failure("student");
            AppError::Unauthorized("Invalid credentials".to_string())
        })?;

        if !verify_password(password, &row.password)? {
            metrics::track_login_failure("student");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let user = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = $1"
        ))
        .bind(row.id)
        .fetch_one(db)
        .await?;

        let token = create_student_token(user.id, &user.email, &user.student_id, jwt_config)?;
        metrics::track_login_success("student");

        Ok(StudentLoginResponse { token, user })
    }

    /// Parent login: the child's matriculation number plus the family
    /// surname, compared case-insensitively. The child must be active.
    #[instrument(skip(db, jwt_config))]
    pub async fn login_parent(
        db: &PgPool,
        student_id: &str,
        surname: &str,
        jwt_config: &JwtConfig,
    ) -> Result<ParentLoginResponse, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = $1"
        ))
        .bind(student_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| {
            metrics::track_login_failure("parent");
            AppError::Unauthorized("Invalid credentials".to_string())
        })?;

        if !student.surname.eq_ignore_ascii_case(surname.trim()) {
            metrics::track_login_failure("parent");
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        if student.status != StudentStatus::Active {
            return Err(AppError::Forbidden(format!(
                "Student account is {}. Please contact the school.",
                student.status
            )));
        }

        let token = create_parent_token(&student.student_id, &student.full_name, jwt_config)?;
        metrics::track_login_success("parent");

        Ok(ParentLoginResponse {
            token,
            student: ParentStudentSummary {
                student_id: student.student_id,
                full_name: student.full_name,
                programme: student.programme,
                department: student.department,
                status: student.status,
            },
        })
    }

    /// Admin login against the configuration allow-list. The audit-log
    /// write is best-effort; its failure never fails the login.
    #[instrument(skip(db, password, jwt_config, admin_config))]
    pub async fn login_admin(
        db: &PgPool,
        email: &str,
        password: &str,
        location: Option<String>,
        user_agent: Option<String>,
        jwt_config: &JwtConfig,
        admin_config: &AdminConfig,
    ) -> Result<AdminLoginResponse, AppError> {
        let credential = admin_config.find(email).ok_or_else(|| {
            metrics::track_login_failure("admin");
            AppError::Unauthorized("Invalid admin credentials".to_string())
        })?;

        if !verify_password(password, &credential.password_hash)? {
            metrics::track_login_failure("admin");
            return Err(AppError::Unauthorized(
                "Invalid admin credentials".to_string(),
            ));
        }

        let token = create_admin_token(&credential.email, jwt_config)?;
        metrics::track_login_success("admin");

        log_admin_action(
            db,
            &credential.email,
            "login",
            None,
            location.as_deref(),
            user_agent.as_deref(),
        )
        .await;

        Ok(AdminLoginResponse {
            token,
            user: AdminProfile {
                email: credential.email.clone(),
                role: Role::Admin,
            },
        })
    }
}
