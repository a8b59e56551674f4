//! Comment model and DTOs.

use roadclips_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub video_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a comment. `content` must already be validated.
#[derive(Debug, Clone)]
pub struct CreateComment {
    pub video_id: DbId,
    pub user_id: DbId,
    pub content: String,
}
