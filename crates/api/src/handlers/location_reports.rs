//! Location correction suggestions submitted by users.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roadclips_core::geo::Coordinates;
use roadclips_core::types::DbId;
use roadclips_db::models::location_report::{CreateLocationReport, LocationReport};
use roadclips_db::repositories::LocationReportRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::handlers::videos::require_approved;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Coordinates picked on the map. Both are required.
#[derive(Debug, Deserialize)]
pub struct CreateLocationReportRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// POST /api/v1/videos/{id}/location-reports
///
/// Files a `pending` report; the video is not moved until an admin approves.
pub async fn create_location_report(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Json(input): Json<CreateLocationReportRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<LocationReport>>)> {
    let coordinates = Coordinates::from_selection(input.latitude, input.longitude)?;
    require_approved(&state, video_id).await?;

    let report = LocationReportRepo::create(
        &state.pool,
        &CreateLocationReport {
            video_id,
            user_id: auth.user_id,
            suggested_latitude: coordinates.latitude,
            suggested_longitude: coordinates.longitude,
        },
    )
    .await?;

    tracing::info!(report_id = report.id, video_id, user_id = auth.user_id, "Location report filed");

    Ok((StatusCode::CREATED, Json(DataResponse { data: report })))
}
