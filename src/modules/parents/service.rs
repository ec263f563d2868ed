use sqlx::PgPool;
use tracing::instrument;

use crate::modules::parents::model::{ParentDashboardResponse, SubjectPerformance};
use crate::modules::students::model::Student;
use crate::modules::students::service::STUDENT_COLUMNS;
use crate::utils::errors::AppError;

pub struct ParentService;

impl ParentService {
    /// Dashboard view of one student, looked up by matriculation number.
    /// Ownership (token student_id == requested student_id) is checked by
    /// the controller before this runs.
    #[instrument(skip(db))]
    pub async fn dashboard(
        db: &PgPool,
        student_id: &str,
    ) -> Result<ParentDashboardResponse, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = $1"
        ))
        .bind(student_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let performance = student
            .subjects
            .iter()
            .map(|subject| SubjectPerformance {
                subject: subject.clone(),
                grade: None,
                percentage: None,
                teacher: None,
            })
            .collect();

        Ok(ParentDashboardResponse {
            student,
            performance,
            attendance: None,
            overall_grade: None,
        })
    }
}
