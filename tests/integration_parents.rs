mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_staff, create_test_student, generate_unique_email, test_state};
use http_body_util::BodyExt;
use registra::modules::staff::model::StaffStatus;
use registra::modules::students::model::StudentStatus;
use registra::router::init_router;
use registra::utils::jwt::{create_parent_token, create_staff_token};
use sqlx::PgPool;
use tower::ServiceExt;

/// Matric numbers contain slashes, so they travel percent-encoded in the
/// path.
fn encode_student_id(student_id: &str) -> String {
    student_id.replace('/', "%2F")
}

fn authed_get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_dashboard_for_own_child(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student = create_test_student(&pool, &email, "pw", StudentStatus::Active).await;

    let token =
        create_parent_token(&student.student_id, &student.full_name, &state.jwt_config).unwrap();

    let app = init_router(state);
    let response = app
        .oneshot(authed_get(
            &format!(
                "/api/parents/student/{}",
                encode_student_id(&student.student_id)
            ),
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    assert_eq!(body["student"]["student_id"], student.student_id);
    assert!(body["student"].get("password").is_none());

    // One performance line per registered subject, grades not yet filled.
    let performance = body["performance"].as_array().unwrap();
    assert_eq!(performance.len(), 3);
    assert_eq!(performance[0]["subject"], "Mathematics");
    assert!(performance[0]["grade"].is_null());
    assert!(body["attendance"].is_null());
    assert!(body["overall_grade"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_dashboard_other_student_forbidden(pool: PgPool) {
    let state = test_state(pool.clone());
    let own =
        create_test_student(&pool, &generate_unique_email(), "pw", StudentStatus::Active).await;
    let other =
        create_test_student(&pool, &generate_unique_email(), "pw", StudentStatus::Active).await;

    let token = create_parent_token(&own.student_id, &own.full_name, &state.jwt_config).unwrap();

    let app = init_router(state);
    let response = app
        .oneshot(authed_get(
            &format!(
                "/api/parents/student/{}",
                encode_student_id(&other.student_id)
            ),
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Not authorized to view this student");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_dashboard_scope_check_before_existence(pool: PgPool) {
    // A mismatched student id is a 403 even when no such student exists.
    let state = test_state(pool);
    let token =
        create_parent_token("MCAS/SCI/25/AAA/O", "Ade Bello", &state.jwt_config).unwrap();

    let app = init_router(state);
    let response = app
        .oneshot(authed_get(
            &format!("/api/parents/student/{}", encode_student_id("MCAS/SCI/25/ZZZ/O")),
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_dashboard_rejects_non_parent_token(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student = create_test_student(&pool, &email, "pw", StudentStatus::Active).await;
    let staff = create_test_staff(&pool, &generate_unique_email(), "pw", StaffStatus::Active).await;

    let token = create_staff_token(staff.id, &staff.email, &state.jwt_config).unwrap();

    let app = init_router(state);
    let response = app
        .oneshot(authed_get(
            &format!(
                "/api/parents/student/{}",
                encode_student_id(&student.student_id)
            ),
            &token,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Parent access required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_dashboard_requires_token(pool: PgPool) {
    let app = init_router(test_state(pool));

    let response = app
        .oneshot(
            Request::builder()
                .uri(&format!(
                    "/api/parents/student/{}",
                    encode_student_id("MCAS/SCI/25/AAA/O")
                ))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "No token provided");
}
