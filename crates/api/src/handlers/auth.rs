//! Handlers for the `/auth` resource (register, login, refresh, logout, current user).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use faal_core::accounts::{validate_password_confirmation, validate_username, MIN_PASSWORD_LENGTH};
use faal_core::error::CoreError;
use faal_db::models::session::CreateSession;
use faal_db::models::user::{CreateUser, User, UserResponse};
use faal_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum consecutive failed login attempts before locking the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// Duration in minutes to lock an account after exceeding failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    pub username: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair returned by register, login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and sign it in. Returns 201 with a token pair.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let username = input.username.trim();
    validate_username(username)?;
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    validate_password_confirmation(&input.password, &input.password_confirm)?;

    let email = input.email.trim();
    if UserRepo::find_by_username(&state.pool, username).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with that username already exists".into(),
        )));
    }
    if UserRepo::find_by_email(&state.pool, email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "A user with that email already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // A concurrent registration still trips uq_users_* and maps to 409.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = create_auth_response(&state, user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns access and refresh tokens.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        let failures = UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if failures >= MAX_FAILED_ATTEMPTS {
            let lock_until = Utc::now() + chrono::Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, lock_until).await?;
            tracing::warn!(user_id = user.id, failures, "Account locked after failed logins");
        }
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    let user = UserRepo::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(invalid_credentials)?;

    let response = create_auth_response(&state, user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a valid refresh token for a new token pair. The old session is revoked.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(invalid_refresh_token)?;

    // Only one of two concurrent refreshes with the same token may rotate it.
    if !SessionRepo::revoke(&state.pool, session.id).await? {
        return Err(invalid_refresh_token());
    }

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let response = create_auth_response(&state, user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke all sessions for the authenticated user. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::debug!(user_id = auth_user.user_id, revoked, "Sessions revoked");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/user
pub async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(DataResponse { data: user.into() }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_refresh_token() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid or expired refresh token".into(),
    ))
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// Generate access + refresh tokens, persist a session row, and build the response.
async fn create_auth_response(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at: jwt.refresh_expires_at(),
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: jwt.access_token_ttl_secs(),
        user: user.into(),
    })
}
