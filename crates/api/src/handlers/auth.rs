//! Handlers for the `/auth` resource (signup, login, refresh, logout, session).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use roadclips_core::error::CoreError;
use roadclips_core::roles::ROLE_USER;
use roadclips_core::types::DbId;
use roadclips_db::models::session::CreateSession;
use roadclips_db::models::user::{CreateUser, User};
use roadclips_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LEN,
};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(max = 256, message = "must be at most 256 characters"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Successful authentication response returned by signup, login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

/// Explicit session context for the client's route gating.
#[derive(Debug, Serialize)]
pub struct SessionContext {
    pub authenticated: bool,
    pub user_id: Option<DbId>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_admin: bool,
}

impl SessionContext {
    fn anonymous() -> Self {
        Self {
            authenticated: false,
            user_id: None,
            email: None,
            role: None,
            is_admin: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Create a profile with the `user` role and sign it in.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LEN)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // A duplicate email surfaces as 409 through `uq_users_email`.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: normalize_email(&input.email),
            password_hash,
            role: ROLE_USER.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "Profile created");

    let response = create_auth_response(&state, &user).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &normalize_email(&input.email))
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Failed login attempt");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchange a refresh token for a new token pair. The old refresh token is
/// revoked, and the role in the new access token is re-read from the profile.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let token_hash = hash_refresh_token(&input.refresh_token);

    let session = SessionRepo::find_active_by_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid or expired refresh token"))?;

    // Only one concurrent redemption of the same token can flip the flag.
    if !SessionRepo::revoke(&state.pool, session.id).await? {
        return Err(AppError::unauthorized("Invalid or expired refresh token"));
    }

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| AppError::unauthorized("User no longer exists"))?;

    let response = create_auth_response(&state, &user).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revoke every session of the caller. Returns 204 No Content.
pub async fn logout(State(state): State<AppState>, auth_user: AuthUser) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth_user.user_id).await?;
    tracing::info!(user_id = auth_user.user_id, revoked, "Logged out");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
///
/// The caller's session context, resolved against the current profile row so
/// role changes show up immediately. Anonymous callers get
/// `authenticated: false`.
pub async fn session(
    State(state): State<AppState>,
    MaybeAuthUser(auth_user): MaybeAuthUser,
) -> AppResult<Json<DataResponse<SessionContext>>> {
    let Some(auth_user) = auth_user else {
        return Ok(Json(DataResponse {
            data: SessionContext::anonymous(),
        }));
    };

    let context = match UserRepo::find_by_id(&state.pool, auth_user.user_id).await? {
        Some(user) => SessionContext {
            authenticated: true,
            user_id: Some(user.id),
            is_admin: user.is_admin(),
            email: Some(user.email),
            role: Some(user.role),
        },
        None => SessionContext::anonymous(),
    };

    Ok(Json(DataResponse { data: context }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Issue an access + refresh token pair and persist the session row.
async fn create_auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, &user.role, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    let (refresh_plaintext, refresh_hash) = generate_refresh_token();
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at: Utc::now() + chrono::Duration::days(jwt.refresh_token_expiry_days),
            user_agent: None,
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh_plaintext,
        expires_in: jwt.access_token_ttl_secs(),
        user: UserInfo {
            id: user.id,
            email: user.email.clone(),
            role: user.role.clone(),
        },
    })
}
