//! Shared query parameter types for API handlers.

use roadclips_core::error::CoreError;
use roadclips_core::geo::BoundingBox;
use roadclips_core::moderation::{ReportStatus, VideoStatus};
use roadclips_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use serde::Deserialize;

use crate::error::AppResult;

/// `?limit=&offset=`
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    /// Clamped `(limit, offset)`.
    pub fn resolve(&self) -> (i64, i64) {
        (
            clamp_limit(self.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT),
            clamp_offset(self.offset),
        )
    }

    /// Whether this is the default first page (the only page that is cached).
    pub fn is_default(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }
}

/// Visible map area: `?min_lat=&max_lat=&min_lng=&max_lng=`.
///
/// Omitting all four means the whole world; giving only some is an error.
#[derive(Debug, Default, Deserialize)]
pub struct BoundsParams {
    pub min_lat: Option<f64>,
    pub max_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lng: Option<f64>,
}

impl BoundsParams {
    pub fn to_bounding_box(&self) -> AppResult<BoundingBox> {
        match (self.min_lat, self.max_lat, self.min_lng, self.max_lng) {
            (None, None, None, None) => Ok(BoundingBox::world()),
            (Some(min_lat), Some(max_lat), Some(min_lng), Some(max_lng)) => {
                Ok(BoundingBox::new(min_lat, max_lat, min_lng, max_lng)?)
            }
            _ => Err(CoreError::Validation(
                "min_lat, max_lat, min_lng and max_lng must be given together".into(),
            )
            .into()),
        }
    }
}

/// `?status=` filter for admin video listings.
#[derive(Debug, Deserialize)]
pub struct VideoStatusFilter {
    pub status: Option<String>,
}

impl VideoStatusFilter {
    pub fn parse(&self) -> AppResult<Option<VideoStatus>> {
        Ok(self.status.as_deref().map(str::parse).transpose()?)
    }
}

/// `?status=` filter for location report listings.
#[derive(Debug, Deserialize)]
pub struct ReportStatusFilter {
    pub status: Option<String>,
}

impl ReportStatusFilter {
    pub fn parse(&self) -> AppResult<Option<ReportStatus>> {
        Ok(self.status.as_deref().map(str::parse).transpose()?)
    }
}
