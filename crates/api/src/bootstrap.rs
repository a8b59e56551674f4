//! Startup provisioning.

use roadclips_db::models::user::User;
use roadclips_db::repositories::UserRepo;
use roadclips_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};
use crate::handlers::auth::normalize_email;

/// Ensure the configured bootstrap profile exists and has the admin role.
///
/// An existing profile keeps its password; only its role is raised.
pub async fn ensure_bootstrap_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<User> {
    let email = normalize_email(&admin.email);
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::ensure_admin(pool, &email, &password_hash).await?;
    tracing::info!(user_id = user.id, email = %user.email, "Bootstrap admin ensured");
    Ok(user)
}
