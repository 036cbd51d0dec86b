//! Shift model routes (e.g., /api/v1/shift-models/*)

use axum::{routing::get, Router};

use crate::api::controller::shift_model::ShiftModelController;
use crate::app_state::AppState;

pub fn shift_model_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(ShiftModelController::list_shift_models)
                .post(ShiftModelController::create_shift_model),
        )
        .route(
            "/{id}",
            get(ShiftModelController::get_shift_model)
                .put(ShiftModelController::update_shift_model)
                .delete(ShiftModelController::delete_shift_model),
        )
}
