//! Handlers for votes on a video.

use axum::extract::{Path, State};
use axum::Json;
use roadclips_core::scoring::{VoteSummary, VoteTally};
use roadclips_core::types::DbId;
use roadclips_db::models::vote::Vote;
use roadclips_db::repositories::VoteRepo;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cache::CacheKey;
use crate::error::{AppError, AppResult};
use crate::handlers::videos::require_approved;
use crate::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /videos/{id}/votes`. `true` is an upvote.
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub vote_type: bool,
}

/// Shared counts plus the caller's own vote.
#[derive(Debug, Serialize)]
pub struct VoteView {
    #[serde(flatten)]
    pub summary: Value,
    /// `None` for anonymous callers and for users who have not voted.
    pub my_vote: Option<bool>,
}

/// GET /api/v1/videos/{id}/votes
///
/// The counts are cached per video; `my_vote` is looked up per request.
pub async fn get_votes(
    State(state): State<AppState>,
    MaybeAuthUser(auth): MaybeAuthUser,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<DataResponse<VoteView>>> {
    let summary = state
        .cache
        .get_or_load(CacheKey::Votes(video_id), || async {
            require_approved(&state, video_id).await?;
            let types = VoteRepo::vote_types_for_video(&state.pool, video_id).await?;
            Ok::<_, AppError>(VoteSummary::from(VoteTally::from_votes(types)))
        })
        .await?;

    let my_vote = match auth {
        Some(user) => VoteRepo::find_for_user(&state.pool, video_id, user.user_id)
            .await?
            .map(|v| v.vote_type),
        None => None,
    };

    Ok(Json(DataResponse {
        data: VoteView { summary, my_vote },
    }))
}

/// POST /api/v1/videos/{id}/votes
///
/// Cast or overwrite the caller's vote. Anonymous callers are rejected by the
/// extractor before anything is read.
pub async fn cast_vote(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<CastVoteRequest>,
) -> AppResult<Json<DataResponse<Vote>>> {
    require_approved(&state, video_id).await?;

    let vote = VoteRepo::upsert(&state.pool, video_id, auth.user_id, input.vote_type).await?;
    state.cache.invalidate(&CacheKey::on_vote(video_id)).await;

    tracing::info!(
        video_id,
        user_id = auth.user_id,
        vote_type = input.vote_type,
        "Vote cast",
    );

    Ok(Json(DataResponse { data: vote }))
}
