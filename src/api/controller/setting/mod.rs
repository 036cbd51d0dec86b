use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::setting::setting_entity::SettingEntity;
use crate::domain::setting::dto::setting_upsert_request::SettingUpsertRequest;
use crate::errors::AppError;

pub struct SettingController;

impl SettingController {
    pub async fn get_settings(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<SettingEntity>>, AppError> {
        to_json(state.setting_service.get_settings().await)
    }

    pub async fn upsert_settings(
        State(state): State<AppState>,
        payload: Result<Json<SettingUpsertRequest>, JsonRejection>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        let Json(payload) = payload?;
        to_json(state.setting_service.upsert_settings(payload).await)
    }

    pub async fn reset_settings(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Value>>, AppError> {
        to_json(state.setting_service.reset_settings().await)
    }
}
