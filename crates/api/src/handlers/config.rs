use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MapsKey {
    pub maps_api_key: Option<String>,
}

/// GET /api/v1/config/maps-key
///
/// The browser-side map key. `null` when the server has none configured.
pub async fn maps_key(State(state): State<AppState>) -> Json<DataResponse<MapsKey>> {
    Json(DataResponse {
        data: MapsKey {
            maps_api_key: state.config.maps_api_key.clone(),
        },
    })
}
