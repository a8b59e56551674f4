//! Repository for the `comments` table.

use roadclips_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

const COLUMNS: &str = "id, video_id, user_id, content, created_at, updated_at";

/// Comments are append-only.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (video_id, user_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.video_id)
            .bind(input.user_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Comments on a video, newest first.
    pub async fn list_for_video(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments
             WHERE video_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(video_id)
            .fetch_all(pool)
            .await
    }
}
