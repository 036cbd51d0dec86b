use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use serde_json::Value;

use crate::api::dto::paginated_response::{PaginatedResponse, PaginationQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created_json, to_json};
use crate::app_state::AppState;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::domain::employee::dto::employee_upsert_request::EmployeeUpsertRequest;
use crate::errors::AppError;

pub struct EmployeeController;

impl EmployeeController {
    pub async fn list_employees(
        State(state): State<AppState>,
        query: Result<Query<PaginationQuery>, QueryRejection>,
    ) -> Result<Json<ApiResponse<PaginatedResponse<EmployeeEntity>>>, AppError> {
        let Query(query) = query?;
        to_json(state.employee_service.list_employees(query).await)
    }

    pub async fn get_employee(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<EmployeeEntity>>, AppError> {
        to_json(state.employee_service.get_employee(id).await)
    }

    pub async fn create_employee(
        State(state): State<AppState>,
        payload: Result<Json<EmployeeUpsertRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<ApiResponse<EmployeeEntity>>), AppError> {
        let Json(payload) = payload?;
        to_created_json(state.employee_service.create_employee(payload).await)
    }

    pub async fn update_employee(
        State(state): State<AppState>,
        Path(id): Path<String>,
        payload: Result<Json<EmployeeUpsertRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<EmployeeEntity>>, AppError> {
        let Json(payload) = payload?;
        to_json(state.employee_service.update_employee(id, payload).await)
    }

    pub async fn delete_employee(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.employee_service.delete_employee(id).await)
    }
}
