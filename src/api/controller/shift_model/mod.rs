use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created_json, to_json};
use crate::app_state::AppState;
use crate::core::persistence::shift_model::shift_model_entity::ShiftModelEntity;
use crate::domain::shift_model::dto::shift_model_upsert_request::ShiftModelUpsertRequest;
use crate::errors::AppError;

pub struct ShiftModelController;

impl ShiftModelController {
    pub async fn list_shift_models(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<ShiftModelEntity>>>, AppError> {
        to_json(state.shift_model_service.list_shift_models().await)
    }

    pub async fn get_shift_model(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<ShiftModelEntity>>, AppError> {
        to_json(state.shift_model_service.get_shift_model(id).await)
    }

    pub async fn create_shift_model(
        State(state): State<AppState>,
        payload: Result<Json<ShiftModelUpsertRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<ApiResponse<ShiftModelEntity>>), AppError> {
        let Json(payload) = payload?;
        to_created_json(state.shift_model_service.create_shift_model(payload).await)
    }

    pub async fn update_shift_model(
        State(state): State<AppState>,
        Path(id): Path<String>,
        payload: Result<Json<ShiftModelUpsertRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<ShiftModelEntity>>, AppError> {
        let Json(payload) = payload?;
        to_json(state.shift_model_service.update_shift_model(id, payload).await)
    }

    pub async fn delete_shift_model(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.shift_model_service.delete_shift_model(id).await)
    }
}
