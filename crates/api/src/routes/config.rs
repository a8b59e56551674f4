use axum::routing::get;
use axum::Router;

use crate::handlers::config;
use crate::state::AppState;

/// Routes mounted at `/config`.
pub fn router() -> Router<AppState> {
    Router::new().route("/maps-key", get(config::maps_key))
}
