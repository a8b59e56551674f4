//! JWT-based session extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use roadclips_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated profile from the `Authorization: Bearer <token>` header.
///
/// Resolved once per request; handlers receive it as an explicit argument
/// instead of looking the session up themselves.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl AuthUser {
    fn from_headers(parts: &Parts, state: &AppState) -> Result<Option<Self>, AppError> {
        let Some(header) = parts.headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| {
                AppError::unauthorized("Invalid Authorization format. Expected: Bearer <token>")
            })?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))?;

        Ok(Some(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        }))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::from_headers(parts, state)?
            .ok_or_else(|| AppError::unauthorized("You must be logged in to do that"))
    }
}

/// Optional session for public endpoints that personalise their output.
///
/// No header yields `MaybeAuthUser(None)`; a present but invalid token is
/// still rejected with 401 so clients notice expired sessions.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_headers(parts, state).map(MaybeAuthUser)
    }
}
