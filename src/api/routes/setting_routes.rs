//! Settings routes (e.g., /api/v1/settings)

use axum::{routing::get, Router};

use crate::api::controller::setting::SettingController;
use crate::app_state::AppState;

pub fn setting_routes() -> Router<AppState> {
    Router::new().route(
        "/",
        get(SettingController::get_settings)
            .put(SettingController::upsert_settings)
            .delete(SettingController::reset_settings),
    )
}
