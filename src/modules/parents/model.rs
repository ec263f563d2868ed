use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::students::model::Student;

/// Per-subject line in the parent dashboard. Grades stay unset until an
/// assessments feature lands; the subject list itself comes from the
/// student's registration.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubjectPerformance {
    pub subject: String,
    pub grade: Option<String>,
    pub percentage: Option<f64>,
    pub teacher: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParentDashboardResponse {
    pub student: Student,
    pub performance: Vec<SubjectPerformance>,
    pub attendance: Option<f64>,
    pub overall_grade: Option<String>,
}
