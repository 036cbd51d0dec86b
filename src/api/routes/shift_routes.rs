//! Shift routes (e.g., /api/v1/shifts/*)

use axum::{routing::get, Router};

use crate::api::controller::shift::ShiftController;
use crate::app_state::AppState;

pub fn shift_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(ShiftController::list_shifts).post(ShiftController::create_shift))
        .route("/grouped", get(ShiftController::get_grouped_shifts))
        .route(
            "/{id}",
            get(ShiftController::get_shift)
                .put(ShiftController::update_shift)
                .delete(ShiftController::delete_shift),
        )
}
