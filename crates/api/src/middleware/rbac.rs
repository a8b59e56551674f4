//! Role-based access control.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use roadclips_core::error::CoreError;
use roadclips_db::repositories::UserRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Unauthenticated requests get 401, other roles 403.
///
/// The role is read from the current profile row rather than the token, so a
/// demotion takes effect on the next request.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut user = AuthUser::from_request_parts(parts, state).await?;
        let profile = UserRepo::find_by_id(&state.pool, user.user_id).await?;
        match profile {
            Some(profile) if profile.is_admin() => {
                user.role = profile.role;
                Ok(RequireAdmin(user))
            }
            _ => Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            ))),
        }
    }
}
