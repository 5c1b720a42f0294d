//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{NaiveTime, Timelike, Utc};
use faal_api::auth::jwt::JwtConfig;
use faal_api::auth::password::hash_password;
use faal_api::config::ServerConfig;
use faal_api::router::build_app_router;
use faal_api::state::AppState;
use faal_core::schedule::FaalSchedule;
use faal_db::models::user::{CreateUser, User};
use faal_db::repositories::UserRepo;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "divan-e-hafez";

/// A schedule whose gate is always open: midnight in UTC.
pub fn open_schedule() -> FaalSchedule {
    FaalSchedule::from_offset_minutes(NaiveTime::from_hms_opt(0, 0, 0).unwrap(), 0).unwrap()
}

/// A schedule whose gate is closed for the rest of the current local day.
///
/// The offset is chosen so that local time is close to noon right now, and
/// the gate sits at 23:59:59.
pub fn closed_schedule() -> FaalSchedule {
    let now = Utc::now();
    let minutes_into_day = (now.hour() * 60 + now.minute()) as i32;
    let offset = 12 * 60 - minutes_into_day;
    FaalSchedule::from_offset_minutes(NaiveTime::from_hms_opt(23, 59, 59).unwrap(), offset)
        .unwrap()
}

/// Build a test `ServerConfig` with safe defaults and the given schedule.
pub fn test_config(faal: FaalSchedule) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        faal,
    }
}

/// Full application router (same middleware as production) with an open gate.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_schedule(pool, open_schedule())
}

pub fn build_test_app_with_schedule(pool: PgPool, faal: FaalSchedule) -> Router {
    build_app_router(AppState::new(pool, test_config(faal)))
}

/// Insert a user with [`TEST_PASSWORD`].
pub async fn create_test_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Mark an account inactive, as an administrator would in the database.
pub async fn deactivate_user(pool: &PgPool, id: i64) {
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .expect("deactivation should succeed");
}

/// Log a user in through the API and return its access token.
pub async fn login_token(app: Router, username: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    let json = body_json(response).await;
    json["access_token"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
