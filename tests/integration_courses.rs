mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_course, create_test_user, token_for};
use courseloop::config::cors::CorsConfig;
use courseloop::config::jwt::JwtConfig;
use courseloop::config::password::PasswordConfig;
use courseloop::modules::users::model::UserRole;
use courseloop::router::init_router;
use courseloop::state::AppState;
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        password_config: PasswordConfig::from_env(),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_draft_course_hidden_from_students(pool: PgPool) {
    let instructor = create_test_user(&pool, UserRole::Instructor).await;
    let student = create_test_user(&pool, UserRole::Student).await;
    let draft_id = create_test_course(&pool, instructor.id, false).await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/courses/{draft_id}"),
            Some(&token_for(&student)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(get(&format!("/api/courses/{draft_id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_draft_lessons_hidden_from_students(pool: PgPool) {
    let instructor = create_test_user(&pool, UserRole::Instructor).await;
    let student = create_test_user(&pool, UserRole::Student).await;
    let draft_id = create_test_course(&pool, instructor.id, false).await;
    let app = setup_test_app(pool.clone()).await;

    // The nested route applies the same visibility rule as the course
    // itself: an authenticated non-owner gets the same 404.
    let response = app
        .clone()
        .oneshot(get(
            &format!("/api/courses/{draft_id}/lessons"),
            Some(&token_for(&student)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Course not found");

    // The owner still sees them.
    let response = app
        .oneshot(get(
            &format!("/api/courses/{draft_id}/lessons"),
            Some(&token_for(&instructor)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_published_lessons_visible_to_students(pool: PgPool) {
    let instructor = create_test_user(&pool, UserRole::Instructor).await;
    let student = create_test_user(&pool, UserRole::Student).await;
    let course_id = create_test_course(&pool, instructor.id, true).await;
    let app = setup_test_app(pool.clone()).await;

    let response = app
        .oneshot(get(
            &format!("/api/courses/{course_id}/lessons"),
            Some(&token_for(&student)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_write_probe_cannot_reveal_draft(pool: PgPool) {
    let owner = create_test_user(&pool, UserRole::Instructor).await;
    let other = create_test_user(&pool, UserRole::Instructor).await;
    let draft_id = create_test_course(&pool, owner.id, false).await;
    let published_id = create_test_course(&pool, owner.id, true).await;
    let app = setup_test_app(pool.clone()).await;

    let update = |course_id: Uuid, token: &str| {
        Request::builder()
            .method("PUT")
            .uri(format!("/api/courses/{course_id}"))
            .header("content-type", "application/json")
            .header("authorization", format!("Bearer {token}"))
            .body(Body::from(
                serde_json::to_string(&json!({"title": "Hijacked"})).unwrap(),
            ))
            .unwrap()
    };

    // A non-owner probing a draft id gets the same 404 as a nonexistent
    // course; a published course they can see is an honest 403.
    let response = app
        .clone()
        .oneshot(update(draft_id, &token_for(&other)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(update(published_id, &token_for(&other)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The owner's write still goes through.
    let response = app
        .oneshot(update(draft_id, &token_for(&owner)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
