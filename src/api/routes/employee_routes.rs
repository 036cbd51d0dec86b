//! Employee routes (e.g., /api/v1/employees/*)

use axum::{routing::get, Router};

use crate::api::controller::employee::EmployeeController;
use crate::app_state::AppState;

pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(EmployeeController::list_employees).post(EmployeeController::create_employee),
        )
        .route(
            "/{id}",
            get(EmployeeController::get_employee)
                .put(EmployeeController::update_employee)
                .delete(EmployeeController::delete_employee),
        )
}
