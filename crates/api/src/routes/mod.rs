pub mod admin;
pub mod auth;
pub mod config;
pub mod health;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/signup | login | refresh          public
/// /auth/logout                            auth
/// /auth/session                           optional auth
///
/// /config/maps-key                        public
///
/// /videos                                 list (public), submit (auth)
/// /videos/upload                          legacy multipart upload (auth)
/// /videos/map                             markers in a bounding box
/// /videos/top                             ranked by score
/// /videos/slug/{slug}                     detail by slug
/// /videos/{id}                            detail by id
/// /videos/{id}/votes                      tally, cast (auth)
/// /videos/{id}/comments                   list, create (auth)
/// /videos/{id}/location-reports           suggest coordinates (auth)
///
/// /admin/videos[/{id}[/status]]           moderation and edits (admin)
/// /admin/votes[/{id}]                     vote cleanup (admin)
/// /admin/location-reports[/{id}/...]      approve, reject (admin)
/// /admin/profiles[/{id}/role]             roles (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/config", config::router())
        .nest("/videos", videos::router())
        .nest("/admin", admin::router())
}
