mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    ADMIN_EMAIL, ADMIN_PASSWORD, create_test_student, generate_unique_email, test_state,
};
use http_body_util::BodyExt;
use registra::modules::students::model::StudentStatus;
use registra::router::init_router;
use registra::utils::jwt::verify_token;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_login_by_email(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student = create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Active).await;

    let app = init_router(state.clone());
    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({ "identifier": email, "password": "secret-pass-1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["student_id"], student.student_id);
    assert!(body["user"].get("password").is_none());

    // Decoded claims carry the authenticated identity and role.
    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, &state.jwt_config).unwrap();
    match claims {
        registra::modules::auth::model::Claims::Student(c) => {
            assert_eq!(c.email, email);
            assert_eq!(c.student_id, student.student_id);
        }
        other => panic!("expected student claims, got {:?}", other),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_login_by_matric_number(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student = create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Active).await;

    let app = init_router(state);
    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({ "identifier": student.student_id, "password": "secret-pass-1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_pending_student_can_still_log_in(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Pending).await;

    let app = init_router(state);
    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({ "identifier": email, "password": "secret-pass-1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["user"]["status"], "pending");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_login_wrong_password(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Active).await;

    let app = init_router(state);
    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({ "identifier": email, "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_login_unknown_identifier(pool: PgPool) {
    let app = init_router(test_state(pool));

    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({ "identifier": "nobody@test.com", "password": "whatever" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_student_login_missing_password(pool: PgPool) {
    let app = init_router(test_state(pool));

    let response = app
        .oneshot(post_json(
            "/api/auth/student/login",
            json!({ "identifier": "someone@test.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "password is required");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_login_success(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student = create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Active).await;

    let app = init_router(state.clone());
    let response = app
        .oneshot(post_json(
            "/api/auth/parent/login",
            json!({ "student_id": student.student_id, "surname": student.surname }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["student"]["student_id"], student.student_id);
    assert_eq!(body["student"]["full_name"], student.full_name);

    let claims = verify_token(body["token"].as_str().unwrap(), &state.jwt_config).unwrap();
    assert_eq!(
        claims.role(),
        registra::modules::auth::model::Role::Parent
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_login_surname_is_case_insensitive(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student = create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Active).await;

    let app = init_router(state);
    let response = app
        .oneshot(post_json(
            "/api/auth/parent/login",
            json!({ "student_id": student.student_id, "surname": student.surname.to_uppercase() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_login_wrong_surname(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student = create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Active).await;

    let app = init_router(state);
    let response = app
        .oneshot(post_json(
            "/api/auth/parent/login",
            json!({ "student_id": student.student_id, "surname": "Wrongname" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_parent_login_rejected_when_student_not_active(pool: PgPool) {
    let state = test_state(pool.clone());
    let email = generate_unique_email();
    let student =
        create_test_student(&pool, &email, "secret-pass-1", StudentStatus::Suspended).await;

    let app = init_router(state);
    let response = app
        .oneshot(post_json(
            "/api/auth/parent/login",
            json!({ "student_id": student.student_id, "surname": student.surname }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(
        body["error"],
        "Student account is suspended. Please contact the school."
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_success(pool: PgPool) {
    let state = test_state(pool.clone());
    let app = init_router(state.clone());

    let response = app
        .oneshot(post_json(
            "/api/auth/admin/login",
            json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["user"]["email"], ADMIN_EMAIL);
    assert_eq!(body["user"]["role"], "admin");

    let claims = verify_token(body["token"].as_str().unwrap(), &state.jwt_config).unwrap();
    assert_eq!(claims.email(), Some(ADMIN_EMAIL));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_email_is_case_insensitive(pool: PgPool) {
    let app = init_router(test_state(pool));

    let response = app
        .oneshot(post_json(
            "/api/auth/admin/login",
            json!({ "email": ADMIN_EMAIL.to_uppercase(), "password": ADMIN_PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_writes_audit_log(pool: PgPool) {
    let app = init_router(test_state(pool.clone()));

    let response = app
        .oneshot(post_json(
            "/api/auth/admin/login",
            json!({
                "email": ADMIN_EMAIL,
                "password": ADMIN_PASSWORD,
                "location": "Lagos"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (count,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM admin_logs WHERE admin_email = $1 AND action = 'login'",
    )
    .bind(ADMIN_EMAIL)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_wrong_password(pool: PgPool) {
    let app = init_router(test_state(pool));

    let response = app
        .oneshot(post_json(
            "/api/auth/admin/login",
            json!({ "email": ADMIN_EMAIL, "password": "wrong" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid admin credentials");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_login_unknown_email(pool: PgPool) {
    let app = init_router(test_state(pool));

    let response = app
        .oneshot(post_json(
            "/api/auth/admin/login",
            json!({ "email": "impostor@meritcollege.edu.ng", "password": ADMIN_PASSWORD }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
