use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use crate::api::dto::shift_dto::{ShiftListQuery, ShiftRangeQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::{to_created_json, to_json};
use crate::app_state::AppState;
use crate::core::persistence::shift::shift_entity::ShiftEntity;
use crate::domain::shift::dto::shift_upsert_request::ShiftUpsertRequest;
use crate::domain::shift::model::DayShiftGroups;
use crate::errors::AppError;

pub struct ShiftController;

impl ShiftController {
    pub async fn list_shifts(
        State(state): State<AppState>,
        query: Result<Query<ShiftListQuery>, QueryRejection>,
    ) -> Result<Json<ApiResponse<Vec<ShiftEntity>>>, AppError> {
        let Query(query) = query?;
        to_json(state.shift_service.list_shifts(query).await)
    }

    /// One row per run of identical intervals, per day; order is final.
    pub async fn get_grouped_shifts(
        State(state): State<AppState>,
        query: Result<Query<ShiftRangeQuery>, QueryRejection>,
    ) -> Result<Json<ApiResponse<Vec<DayShiftGroups>>>, AppError> {
        let Query(range) = query?;
        to_json(state.shift_service.get_grouped_shifts(range).await)
    }

    pub async fn get_shift(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<ShiftEntity>>, AppError> {
        to_json(state.shift_service.get_shift(id).await)
    }

    pub async fn create_shift(
        State(state): State<AppState>,
        payload: Result<Json<ShiftUpsertRequest>, JsonRejection>,
    ) -> Result<(StatusCode, Json<ApiResponse<ShiftEntity>>), AppError> {
        let Json(payload) = payload?;
        to_created_json(state.shift_service.create_shift(payload).await)
    }

    pub async fn update_shift(
        State(state): State<AppState>,
        Path(id): Path<String>,
        payload: Result<Json<ShiftUpsertRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<ShiftEntity>>, AppError> {
        let Json(payload) = payload?;
        to_json(state.shift_service.update_shift(id, payload).await)
    }

    pub async fn delete_shift(
        State(state): State<AppState>,
        Path(id): Path<String>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.shift_service.delete_shift(id).await)
    }
}
