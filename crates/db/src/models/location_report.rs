//! Location report model and DTOs.

use roadclips_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `location_reports` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocationReport {
    pub id: DbId,
    pub video_id: DbId,
    pub user_id: Option<DbId>,
    pub suggested_latitude: f64,
    pub suggested_longitude: f64,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a report.
#[derive(Debug, Clone)]
pub struct CreateLocationReport {
    pub video_id: DbId,
    pub user_id: DbId,
    pub suggested_latitude: f64,
    pub suggested_longitude: f64,
}
