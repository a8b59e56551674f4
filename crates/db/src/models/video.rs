//! Video model, query shapes and DTOs.

use roadclips_core::scoring::{VoteSummary, VoteTally};
use roadclips_core::submission::VideoDraft;
use roadclips_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `videos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Video {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub source: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: String,
    pub user_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A video together with every vote type cast on it (`true` = up).
#[derive(Debug, Clone, FromRow)]
pub struct VideoWithVotes {
    #[sqlx(flatten)]
    pub video: Video,
    pub vote_types: Vec<bool>,
}

impl VideoWithVotes {
    pub fn tally(&self) -> VoteTally {
        VoteTally::from_votes(self.vote_types.iter().copied())
    }
}

/// A video with its derived vote counts, as returned by detail and top views.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredVideo {
    #[serde(flatten)]
    pub video: Video,
    pub votes: VoteSummary,
}

impl From<VideoWithVotes> for ScoredVideo {
    fn from(row: VideoWithVotes) -> Self {
        let votes = row.tally().into();
        Self {
            video: row.video,
            votes,
        }
    }
}

/// Minimal projection for map pins.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MapMarker {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub thumbnail_url: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// DTO for inserting a new (pending) video.
#[derive(Debug, Clone)]
pub struct CreateVideo {
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub source: String,
    pub latitude: f64,
    pub longitude: f64,
    pub user_id: DbId,
}

impl CreateVideo {
    /// Build an insert from a validated draft and the final (collision-free) slug.
    pub fn from_draft(draft: VideoDraft, slug: String, user_id: DbId) -> Self {
        Self {
            title: draft.title,
            description: draft.description,
            slug,
            video_url: draft.video_url,
            thumbnail_url: draft.thumbnail_url,
            source: draft.source.as_str().to_string(),
            latitude: draft.coordinates.latitude,
            longitude: draft.coordinates.longitude,
            user_id,
        }
    }
}

/// Admin edit. Only non-`None` fields are applied.
#[derive(Debug, Clone, Default)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
