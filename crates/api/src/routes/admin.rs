//! Route definitions for the `/admin` resource (admin role required).

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /videos                          -> list_videos (?status)
/// PATCH  /videos/{id}                     -> update_video
/// DELETE /videos/{id}                     -> delete_video
/// PUT    /videos/{id}/status              -> set_video_status
/// GET    /votes                           -> list_votes
/// DELETE /votes/{id}                      -> delete_vote
/// GET    /location-reports                -> list_location_reports (?status)
/// POST   /location-reports/{id}/approve   -> approve_location_report
/// POST   /location-reports/{id}/reject    -> reject_location_report
/// GET    /profiles                        -> list_profiles
/// PUT    /profiles/{id}/role              -> set_profile_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos", get(admin::list_videos))
        .route(
            "/videos/{id}",
            patch(admin::update_video).delete(admin::delete_video),
        )
        .route("/videos/{id}/status", put(admin::set_video_status))
        .route("/votes", get(admin::list_votes))
        .route("/votes/{id}", delete(admin::delete_vote))
        .route("/location-reports", get(admin::list_location_reports))
        .route(
            "/location-reports/{id}/approve",
            post(admin::approve_location_report),
        )
        .route(
            "/location-reports/{id}/reject",
            post(admin::reject_location_report),
        )
        .route("/profiles", get(admin::list_profiles))
        .route("/profiles/{id}/role", put(admin::set_profile_role))
}
