//! Repository for the `location_reports` table.

use roadclips_core::moderation::{STATUS_APPROVED, STATUS_PENDING, STATUS_REJECTED};
use roadclips_core::types::DbId;
use sqlx::PgPool;

use crate::models::location_report::{CreateLocationReport, LocationReport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, video_id, user_id, suggested_latitude, suggested_longitude, \
    status, created_at, updated_at";

/// Provides filing and review of location reports.
pub struct LocationReportRepo;

impl LocationReportRepo {
    /// File a new (pending) report.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLocationReport,
    ) -> Result<LocationReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO location_reports
                (video_id, user_id, suggested_latitude, suggested_longitude)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LocationReport>(&query)
            .bind(input.video_id)
            .bind(input.user_id)
            .bind(input.suggested_latitude)
            .bind(input.suggested_longitude)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LocationReport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM location_reports WHERE id = $1");
        sqlx::query_as::<_, LocationReport>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Reports, optionally filtered by status, newest first.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<LocationReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM location_reports
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, LocationReport>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Approve a pending report and move its video to the suggested coordinates.
    ///
    /// Both writes happen in one transaction. Returns `None` (and changes
    /// nothing) if the report does not exist or is no longer pending.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<LocationReport>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE location_reports SET status = $2
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, LocationReport>(&query)
            .bind(id)
            .bind(STATUS_APPROVED)
            .bind(STATUS_PENDING)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(report) = report else {
            return Ok(None);
        };

        sqlx::query("UPDATE videos SET latitude = $2, longitude = $3 WHERE id = $1")
            .bind(report.video_id)
            .bind(report.suggested_latitude)
            .bind(report.suggested_longitude)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(report))
    }

    /// Reject a pending report. Returns `None` if it does not exist or is
    /// no longer pending.
    pub async fn reject(pool: &PgPool, id: DbId) -> Result<Option<LocationReport>, sqlx::Error> {
        let query = format!(
            "UPDATE location_reports SET status = $2
             WHERE id = $1 AND status = $3
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LocationReport>(&query)
            .bind(id)
            .bind(STATUS_REJECTED)
            .bind(STATUS_PENDING)
            .fetch_optional(pool)
            .await
    }
}
