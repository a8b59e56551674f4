//! Repository for the `videos` table.

use roadclips_core::geo::BoundingBox;
use roadclips_core::moderation::STATUS_APPROVED;
use roadclips_core::slug::slug_with_suffix;
use roadclips_core::types::DbId;
use sqlx::PgPool;

use crate::models::video::{CreateVideo, MapMarker, UpdateVideo, Video, VideoWithVotes};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, slug, video_url, thumbnail_url, source, \
    latitude, longitude, status, user_id, created_at, updated_at";

/// Video columns plus the aggregated vote types, for use with `GROUP BY v.id`.
const WITH_VOTES_SELECT: &str = "SELECT v.id, v.title, v.description, v.slug, v.video_url, \
    v.thumbnail_url, v.source, v.latitude, v.longitude, v.status, v.user_id, \
    v.created_at, v.updated_at, \
    COALESCE(ARRAY_AGG(vt.vote_type) FILTER (WHERE vt.id IS NOT NULL), '{}'::boolean[]) \
        AS vote_types \
    FROM videos v \
    LEFT JOIN votes vt ON vt.video_id = v.id";

/// Inserts tried by [`VideoRepo::create_with_free_slug`] before giving up.
pub const SLUG_ATTEMPTS: u32 = 5;

/// Provides CRUD and listing operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video. Status defaults to `pending`.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let query = format!(
            "INSERT INTO videos
                (title, description, slug, video_url, thumbnail_url, source,
                 latitude, longitude, user_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.slug)
            .bind(&input.video_url)
            .bind(&input.thumbnail_url)
            .bind(&input.source)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a video by ID regardless of status.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an approved video by ID. Pending and rejected videos are invisible.
    pub async fn find_approved_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1 AND status = $2");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(STATUS_APPROVED)
            .fetch_optional(pool)
            .await
    }

    /// Approved video by ID with its vote types.
    pub async fn find_approved_with_votes_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VideoWithVotes>, sqlx::Error> {
        let query = format!(
            "{WITH_VOTES_SELECT}
             WHERE v.id = $1 AND v.status = $2
             GROUP BY v.id"
        );
        sqlx::query_as::<_, VideoWithVotes>(&query)
            .bind(id)
            .bind(STATUS_APPROVED)
            .fetch_optional(pool)
            .await
    }

    /// Approved video by slug with its vote types.
    pub async fn find_approved_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<VideoWithVotes>, sqlx::Error> {
        let query = format!(
            "{WITH_VOTES_SELECT}
             WHERE v.slug = $1 AND v.status = $2
             GROUP BY v.id"
        );
        sqlx::query_as::<_, VideoWithVotes>(&query)
            .bind(slug)
            .bind(STATUS_APPROVED)
            .fetch_optional(pool)
            .await
    }

    /// Approved videos, newest first.
    pub async fn list_approved(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE status = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(STATUS_APPROVED)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Map pins for approved videos inside a bounding box.
    ///
    /// A box whose `min_longitude` exceeds `max_longitude` wraps the antimeridian.
    pub async fn list_approved_in_bounds(
        pool: &PgPool,
        bounds: &BoundingBox,
    ) -> Result<Vec<MapMarker>, sqlx::Error> {
        let longitude_clause = if bounds.crosses_antimeridian() {
            "(longitude >= $4 OR longitude <= $5)"
        } else {
            "longitude BETWEEN $4 AND $5"
        };
        let query = format!(
            "SELECT id, title, slug, thumbnail_url, latitude, longitude FROM videos
             WHERE status = $1
               AND latitude BETWEEN $2 AND $3
               AND {longitude_clause}
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MapMarker>(&query)
            .bind(STATUS_APPROVED)
            .bind(bounds.min_latitude)
            .bind(bounds.max_latitude)
            .bind(bounds.min_longitude)
            .bind(bounds.max_longitude)
            .fetch_all(pool)
            .await
    }

    /// Every approved video with its vote types, newest first.
    ///
    /// Scoring and ranking happen in the caller.
    pub async fn list_approved_with_votes(
        pool: &PgPool,
    ) -> Result<Vec<VideoWithVotes>, sqlx::Error> {
        let query = format!(
            "{WITH_VOTES_SELECT}
             WHERE v.status = $1
             GROUP BY v.id
             ORDER BY v.created_at DESC, v.id DESC"
        );
        sqlx::query_as::<_, VideoWithVotes>(&query)
            .bind(STATUS_APPROVED)
            .fetch_all(pool)
            .await
    }

    /// All videos for moderation, optionally filtered by status, newest first.
    pub async fn list_all(pool: &PgPool, status: Option<&str>) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM videos
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Next free slug for `base`: `base` itself if nothing uses it yet,
    /// otherwise `base-N` with `N` one past the highest suffix in use.
    pub async fn free_slug(pool: &PgPool, base: &str) -> Result<String, sqlx::Error> {
        let (highest,): (i64,) = sqlx::query_as(
            "SELECT COALESCE(MAX(CASE WHEN slug = $1 THEN 1
                                      ELSE substring(slug FROM '-([0-9]{1,9})$')::BIGINT
                                 END), 0)
             FROM videos
             WHERE slug = $1 OR slug ~ ('^' || $1 || '-[0-9]{1,9}$')",
        )
        .bind(base)
        .fetch_one(pool)
        .await?;

        let next = u32::try_from(highest + 1).unwrap_or(u32::MAX);
        Ok(slug_with_suffix(base, next))
    }

    /// Insert `input` under the next free slug derived from `base`.
    ///
    /// A concurrent insert can claim the same slug between lookup and insert;
    /// on a `uq_videos_slug` violation the lookup runs again, up to
    /// [`SLUG_ATTEMPTS`] times.
    pub async fn create_with_free_slug(
        pool: &PgPool,
        base: &str,
        mut input: CreateVideo,
    ) -> Result<Video, sqlx::Error> {
        let mut attempt = 1;
        loop {
            input.slug = Self::free_slug(pool, base).await?;
            match Self::create(pool, &input).await {
                Err(sqlx::Error::Database(db_err))
                    if db_err.constraint() == Some("uq_videos_slug") && attempt < SLUG_ATTEMPTS =>
                {
                    attempt += 1;
                }
                other => return other,
            }
        }
    }

    /// Set the moderation status. Returns `None` if the video does not exist.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("UPDATE videos SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Admin edit. Only non-`None` fields in `input` are applied.
    ///
    /// The slug is left untouched so existing links keep working.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                latitude = COALESCE($4, latitude),
                longitude = COALESCE($5, longitude)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_optional(pool)
            .await
    }

    /// Delete a video, returning the removed row.
    ///
    /// Votes, comments and location reports go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("DELETE FROM videos WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
