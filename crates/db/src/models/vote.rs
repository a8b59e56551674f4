//! Vote model and DTOs.

use roadclips_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `votes` table. `vote_type` is `true` for an upvote.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub video_id: DbId,
    pub user_id: DbId,
    pub vote_type: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Admin listing row: a vote with the video title and voter email.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VoteWithContext {
    pub id: DbId,
    pub video_id: DbId,
    pub video_title: String,
    pub user_id: DbId,
    pub user_email: String,
    pub vote_type: bool,
    pub created_at: Timestamp,
}
