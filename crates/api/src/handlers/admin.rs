//! Admin-only handlers: moderation, edits, vote cleanup, location reports
//! and profile roles.
//!
//! Every handler takes [`RequireAdmin`], so non-admins get 403 before any
//! query runs. Mutations invalidate the cached public views they touch.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use roadclips_core::error::CoreError;
use roadclips_core::geo::Coordinates;
use roadclips_core::moderation::{ensure_report_pending, Decision, ReportStatus, VideoStatus};
use roadclips_core::roles::{validate_role, ROLE_ADMIN};
use roadclips_core::submission::{validate_description, validate_title, SOURCE_UPLOAD};
use roadclips_core::types::DbId;
use roadclips_db::models::location_report::LocationReport;
use roadclips_db::models::user::UserResponse;
use roadclips_db::models::video::{UpdateVideo, Video};
use roadclips_db::models::vote::VoteWithContext;
use roadclips_db::repositories::{LocationReportRepo, UserRepo, VideoRepo, VoteRepo};
use serde::Deserialize;

use crate::cache::CacheKey;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::{ReportStatusFilter, VideoStatusFilter};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PATCH /admin/videos/{id}`. Absent fields are unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    /// A blank description leaves the stored one unchanged.
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl UpdateVideoRequest {
    fn into_update(self) -> Result<UpdateVideo, CoreError> {
        let title = self.title.as_deref().map(validate_title).transpose()?;
        let description = validate_description(self.description.as_deref())?;
        let coordinates = match (self.latitude, self.longitude) {
            (None, None) => None,
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)?),
            _ => {
                return Err(CoreError::Validation(
                    "Latitude and longitude must be provided together".into(),
                ))
            }
        };

        Ok(UpdateVideo {
            title,
            description,
            latitude: coordinates.map(|c| c.latitude),
            longitude: coordinates.map(|c| c.longitude),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct SetVideoStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SetRoleRequest {
    pub role: String,
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/videos?status=
pub async fn list_videos(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<VideoStatusFilter>,
) -> AppResult<Json<DataResponse<Vec<Video>>>> {
    let status = filter.parse()?;
    let videos = VideoRepo::list_all(&state.pool, status.map(VideoStatus::as_str)).await?;
    Ok(Json(DataResponse { data: videos }))
}

/// PATCH /api/v1/admin/videos/{id}
///
/// The slug is kept so shared links survive title edits.
pub async fn update_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<UpdateVideoRequest>,
) -> AppResult<Json<DataResponse<Video>>> {
    let update = input.into_update()?;

    let video = VideoRepo::update(&state.pool, video_id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Video", video_id))?;
    state.cache.invalidate(&CacheKey::on_video_change(video_id)).await;

    tracing::info!(video_id, admin_id = admin.user_id, "Video edited");
    Ok(Json(DataResponse { data: video }))
}

/// PUT /api/v1/admin/videos/{id}/status
///
/// Approve or reject. Decisions may be changed later, but a video never goes
/// back to `pending`.
pub async fn set_video_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<SetVideoStatusRequest>,
) -> AppResult<Json<DataResponse<Video>>> {
    let decision = Decision::try_from(input.status.parse::<VideoStatus>()?)?;
    let status = decision.video_status();

    let video = VideoRepo::set_status(&state.pool, video_id, status.as_str())
        .await?
        .ok_or_else(|| AppError::not_found("Video", video_id))?;
    state.cache.invalidate(&CacheKey::on_video_change(video_id)).await;

    tracing::info!(video_id, admin_id = admin.user_id, status = %status, "Video moderated");
    Ok(Json(DataResponse { data: video }))
}

/// DELETE /api/v1/admin/videos/{id}
///
/// Votes, comments and reports are removed with the video. For direct
/// uploads the stored file is removed too, best-effort.
pub async fn delete_video(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let video = VideoRepo::delete(&state.pool, video_id)
        .await?
        .ok_or_else(|| AppError::not_found("Video", video_id))?;
    state.cache.invalidate(&CacheKey::on_video_change(video_id)).await;

    if video.source == SOURCE_UPLOAD {
        state.storage.remove_by_url(&video.video_url).await;
    }

    tracing::info!(video_id, admin_id = admin.user_id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/votes
pub async fn list_votes(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<VoteWithContext>>>> {
    let votes = VoteRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: votes }))
}

/// DELETE /api/v1/admin/votes/{id}
pub async fn delete_vote(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(vote_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let vote = VoteRepo::delete(&state.pool, vote_id)
        .await?
        .ok_or_else(|| AppError::not_found("Vote", vote_id))?;
    state.cache.invalidate(&CacheKey::on_vote(vote.video_id)).await;

    tracing::info!(vote_id, video_id = vote.video_id, admin_id = admin.user_id, "Vote deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Location reports
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/location-reports?status=
pub async fn list_location_reports(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(filter): Query<ReportStatusFilter>,
) -> AppResult<Json<DataResponse<Vec<LocationReport>>>> {
    let status = filter.parse()?;
    let reports = LocationReportRepo::list(&state.pool, status.map(ReportStatus::as_str)).await?;
    Ok(Json(DataResponse { data: reports }))
}

/// POST /api/v1/admin/location-reports/{id}/approve
///
/// Marks the report approved and moves the video in one transaction.
pub async fn approve_location_report(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(report_id): Path<DbId>,
) -> AppResult<Json<DataResponse<LocationReport>>> {
    let Some(report) = LocationReportRepo::approve(&state.pool, report_id).await? else {
        return Err(undecidable_report(&state, report_id).await);
    };
    state
        .cache
        .invalidate(&CacheKey::on_video_change(report.video_id))
        .await;

    tracing::info!(
        report_id,
        video_id = report.video_id,
        admin_id = admin.user_id,
        "Location report approved",
    );
    Ok(Json(DataResponse { data: report }))
}

/// POST /api/v1/admin/location-reports/{id}/reject
pub async fn reject_location_report(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(report_id): Path<DbId>,
) -> AppResult<Json<DataResponse<LocationReport>>> {
    let Some(report) = LocationReportRepo::reject(&state.pool, report_id).await? else {
        return Err(undecidable_report(&state, report_id).await);
    };

    tracing::info!(
        report_id,
        video_id = report.video_id,
        admin_id = admin.user_id,
        "Location report rejected",
    );
    Ok(Json(DataResponse { data: report }))
}

/// Why a decision on `report_id` did not apply: 404 if it does not exist,
/// 409 if it was already decided.
async fn undecidable_report(state: &AppState, report_id: DbId) -> AppError {
    let existing = match LocationReportRepo::find_by_id(&state.pool, report_id).await {
        Ok(existing) => existing,
        Err(e) => return e.into(),
    };
    let Some(existing) = existing else {
        return AppError::not_found("Location report", report_id);
    };

    let current = match existing.status.parse::<ReportStatus>() {
        Ok(current) => current,
        Err(e) => return e.into(),
    };
    match ensure_report_pending(current) {
        Err(e) => e.into(),
        // Decided concurrently between the update and this lookup.
        Ok(()) => AppError::Core(CoreError::Conflict(
            "Location report is being decided by another request".into(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/profiles
pub async fn list_profiles(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// PUT /api/v1/admin/profiles/{id}/role
///
/// The new role takes effect in the target's access token on their next
/// refresh. Admins cannot demote themselves.
pub async fn set_profile_role(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<SetRoleRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    validate_role(&input.role).map_err(CoreError::Validation)?;

    if user_id == admin.user_id && input.role != ROLE_ADMIN {
        return Err(AppError::Core(CoreError::Conflict(
            "You cannot remove your own admin role".into(),
        )));
    }

    let user = UserRepo::set_role(&state.pool, user_id, &input.role)
        .await?
        .ok_or_else(|| AppError::not_found("Profile", user_id))?;

    tracing::info!(user_id, admin_id = admin.user_id, role = %user.role, "Profile role changed");
    Ok(Json(DataResponse {
        data: UserResponse::from(user),
    }))
}
