//! Handlers for public video views and submission.
//!
//! Public reads only ever see approved videos. Submissions land as
//! `pending` and stay invisible until an admin approves them, so they do not
//! invalidate any cached view.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roadclips_core::error::CoreError;
use roadclips_core::geo::Coordinates;
use roadclips_core::scoring::rank_by_score;
use roadclips_core::submission::{self, upload_draft, youtube_draft, VideoDraft};
use roadclips_core::types::DbId;
use roadclips_core::upload::{validate_size, video_extension};
use roadclips_db::models::video::{CreateVideo, MapMarker, ScoredVideo, Video};
use roadclips_db::repositories::VideoRepo;
use serde::Deserialize;
use serde_json::Value;

use crate::cache::CacheKey;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{BoundsParams, PaginationParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /videos`.
///
/// Coordinates come from the map picker and may be missing if the user
/// never clicked the map.
#[derive(Debug, Deserialize)]
pub struct SubmitVideoRequest {
    pub title: String,
    pub description: Option<String>,
    pub youtube_url: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

/// GET /api/v1/videos
///
/// Approved videos, newest first. The default page is cached.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let (limit, offset) = params.resolve();
    let load = || async {
        let videos = VideoRepo::list_approved(&state.pool, limit, offset).await?;
        Ok::<_, AppError>(videos)
    };

    let data = if params.is_default() {
        state.cache.get_or_load(CacheKey::ApprovedVideos, load).await?
    } else {
        serde_json::to_value(load().await?)
            .map_err(|e| AppError::InternalError(e.to_string()))?
    };

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/videos/map
///
/// Pins for approved videos inside the visible map area.
pub async fn map_markers(
    State(state): State<AppState>,
    Query(params): Query<BoundsParams>,
) -> AppResult<Json<DataResponse<Vec<MapMarker>>>> {
    let bounds = params.to_bounding_box()?;
    let markers = VideoRepo::list_approved_in_bounds(&state.pool, &bounds).await?;
    Ok(Json(DataResponse { data: markers }))
}

/// GET /api/v1/videos/top
///
/// Approved videos ranked by descending score. Equal scores keep the
/// newest-first order the rows were fetched in.
pub async fn top_videos(State(state): State<AppState>) -> AppResult<Json<DataResponse<Value>>> {
    let data = state
        .cache
        .get_or_load(CacheKey::TopVideos, || async {
            let rows = VideoRepo::list_approved_with_votes(&state.pool).await?;
            let scored: Vec<ScoredVideo> = rows.into_iter().map(ScoredVideo::from).collect();
            Ok::<_, AppError>(rank_by_score(scored, |v| v.votes.score))
        })
        .await?;

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/videos/slug/{slug}
pub async fn get_video_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<ScoredVideo>>> {
    let row = VideoRepo::find_approved_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByKey {
                entity: "Video",
                key: slug,
            })
        })?;

    Ok(Json(DataResponse { data: row.into() }))
}

/// GET /api/v1/videos/{id}
///
/// Legacy id route. Cached per video.
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Value>>> {
    let data = state
        .cache
        .get_or_load(CacheKey::VideoDetail(video_id), || async {
            let row = VideoRepo::find_approved_with_votes_by_id(&state.pool, video_id)
                .await?
                .ok_or_else(|| AppError::not_found("Video", video_id))?;
            Ok::<_, AppError>(ScoredVideo::from(row))
        })
        .await?;

    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// POST /api/v1/videos
///
/// Submit a YouTube clip pinned to a location. Everything is validated
/// before any write; the video is stored as `pending`.
pub async fn submit_video(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SubmitVideoRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Video>>)> {
    let draft = youtube_draft(
        &input.title,
        input.description.as_deref(),
        &input.youtube_url,
        input.latitude,
        input.longitude,
    )?;

    let video = insert_draft(&state, draft, auth.user_id).await?;
    tracing::info!(video_id = video.id, user_id = auth.user_id, slug = %video.slug, "Video submitted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// POST /api/v1/videos/upload
///
/// Legacy direct upload. Multipart fields: `file` (required), `title`,
/// `description`, `latitude`, `longitude`. Metadata is validated before the
/// file is written; the file is removed again if the insert fails.
pub async fn upload_video(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Video>>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut title = String::new();
    let mut description: Option<String> = None;
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            "title" => title = read_text(field).await?,
            "description" => description = Some(read_text(field).await?),
            "latitude" => latitude = read_text(field).await?.trim().parse().ok(),
            "longitude" => longitude = read_text(field).await?.trim().parse().ok(),
            _ => {}
        }
    }

    submission::validate_title(&title)?;
    submission::validate_description(description.as_deref())?;
    let coordinates = Coordinates::from_selection(latitude, longitude)?;
    let (filename, data) = file_data
        .ok_or_else(|| AppError::Core(CoreError::Validation("Please select a video file".into())))?;
    video_extension(&filename)?;
    validate_size(data.len(), state.config.max_upload_bytes)?;

    let stored = state.storage.save(&filename, &data).await?;
    let draft = upload_draft(&title, description.as_deref(), stored.url.clone(), coordinates)?;

    let video = match insert_draft(&state, draft, auth.user_id).await {
        Ok(video) => video,
        Err(e) => {
            state.storage.remove_by_url(&stored.url).await;
            return Err(e);
        }
    };

    tracing::info!(
        video_id = video.id,
        user_id = auth.user_id,
        file_name = %stored.file_name,
        "Video uploaded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a draft under the next free slug derived from its title.
async fn insert_draft(state: &AppState, draft: VideoDraft, user_id: DbId) -> AppResult<Video> {
    let base = draft.slug.clone();
    let input = CreateVideo::from_draft(draft, base.clone(), user_id);
    Ok(VideoRepo::create_with_free_slug(&state.pool, &base, input).await?)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}

/// Load an approved video or fail with 404. Interactions (votes, comments,
/// reports) are only allowed on publicly visible videos.
pub(crate) async fn require_approved(state: &AppState, video_id: DbId) -> AppResult<Video> {
    VideoRepo::find_approved_by_id(&state.pool, video_id)
        .await?
        .ok_or_else(|| AppError::not_found("Video", video_id))
}
