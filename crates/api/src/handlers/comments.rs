use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roadclips_core::submission::validate_comment;
use roadclips_core::types::DbId;
use roadclips_db::models::comment::{Comment, CreateComment};
use roadclips_db::repositories::CommentRepo;
use serde::Deserialize;
use serde_json::Value;

use crate::cache::CacheKey;
use crate::error::{AppError, AppResult};
use crate::handlers::videos::require_approved;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

/// GET /api/v1/videos/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Value>>> {
    let data = state
        .cache
        .get_or_load(CacheKey::Comments(video_id), || async {
            require_approved(&state, video_id).await?;
            Ok::<_, AppError>(CommentRepo::list_for_video(&state.pool, video_id).await?)
        })
        .await?;

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/videos/{id}/comments
pub async fn create_comment(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Comment>>)> {
    let content = validate_comment(&input.content)?;
    require_approved(&state, video_id).await?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            video_id,
            user_id: auth.user_id,
            content,
        },
    )
    .await?;
    state.cache.invalidate(&CacheKey::on_comment(video_id)).await;

    tracing::info!(comment_id = comment.id, video_id, user_id = auth.user_id, "Comment added");

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}
