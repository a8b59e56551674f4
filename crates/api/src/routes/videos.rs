//! Route definitions for the public `/videos` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{comments, location_reports, videos, votes};
use crate::state::AppState;

/// Routes mounted at `/videos`.
///
/// ```text
/// GET  /                        -> list_videos
/// POST /                        -> submit_video (auth)
/// POST /upload                  -> upload_video (auth, multipart)
/// GET  /map                     -> map_markers
/// GET  /top                     -> top_videos
/// GET  /slug/{slug}             -> get_video_by_slug
/// GET  /{id}                    -> get_video
/// GET  /{id}/votes              -> get_votes
/// POST /{id}/votes              -> cast_vote (auth)
/// GET  /{id}/comments           -> list_comments
/// POST /{id}/comments           -> create_comment (auth)
/// POST /{id}/location-reports   -> create_location_report (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list_videos).post(videos::submit_video))
        .route("/upload", post(videos::upload_video))
        .route("/map", get(videos::map_markers))
        .route("/top", get(videos::top_videos))
        .route("/slug/{slug}", get(videos::get_video_by_slug))
        .route("/{id}", get(videos::get_video))
        .route("/{id}/votes", get(votes::get_votes).post(votes::cast_vote))
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/{id}/location-reports",
            post(location_reports::create_location_report),
        )
}
