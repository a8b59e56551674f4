//! Repository for the `votes` table.

use roadclips_core::types::DbId;
use sqlx::PgPool;

use crate::models::vote::{Vote, VoteWithContext};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, video_id, user_id, vote_type, created_at, updated_at";

/// Provides vote recording and listing.
pub struct VoteRepo;

impl VoteRepo {
    /// Record a user's vote on a video, overwriting any earlier vote.
    ///
    /// Uses `ON CONFLICT (video_id, user_id) DO UPDATE` against
    /// `uq_votes_video_user` to guarantee one row per (video, user) even when
    /// the same user votes twice concurrently.
    pub async fn upsert(
        pool: &PgPool,
        video_id: DbId,
        user_id: DbId,
        vote_type: bool,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (video_id, user_id, vote_type) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (video_id, user_id) DO UPDATE \
             SET vote_type = EXCLUDED.vote_type \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(video_id)
            .bind(user_id)
            .bind(vote_type)
            .fetch_one(pool)
            .await
    }

    /// All vote types cast on a video (`true` = up).
    pub async fn vote_types_for_video(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Vec<bool>, sqlx::Error> {
        let rows: Vec<(bool,)> =
            sqlx::query_as("SELECT vote_type FROM votes WHERE video_id = $1 ORDER BY id")
                .bind(video_id)
                .fetch_all(pool)
                .await?;
        Ok(rows.into_iter().map(|(vote_type,)| vote_type).collect())
    }

    /// A specific user's vote on a video, if any.
    pub async fn find_for_user(
        pool: &PgPool,
        video_id: DbId,
        user_id: DbId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE video_id = $1 AND user_id = $2");
        sqlx::query_as::<_, Vote>(&query)
            .bind(video_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// All votes with video title and voter email, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<VoteWithContext>, sqlx::Error> {
        sqlx::query_as::<_, VoteWithContext>(
            "SELECT vt.id, vt.video_id, v.title AS video_title, vt.user_id,
                    u.email AS user_email, vt.vote_type, vt.created_at
             FROM votes vt
             JOIN videos v ON v.id = vt.video_id
             JOIN users u ON u.id = vt.user_id
             ORDER BY vt.created_at DESC, vt.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Delete a vote, returning the removed row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("DELETE FROM votes WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
