use anyhow::Result;
use serde_json::Value;
use validator::Validate;

use crate::core::persistence::setting::setting_api_repository_trait::SettingApiRepository;
use crate::core::persistence::setting::setting_entity::SettingEntity;
use crate::domain::setting::dto::setting_upsert_request::SettingUpsertRequest;

pub async fn get_settings<R: SettingApiRepository>(repo: &R) -> Result<SettingEntity> {
    repo.read()
}

pub async fn upsert_settings<R: SettingApiRepository>(
    repo: &R,
    req: SettingUpsertRequest,
) -> Result<Value> {
    req.validate()?;

    let mut pending = Some(req);
    let settings = repo.update_with(&mut |s| {
        if let Some(req) = pending.take() {
            s.apply_update(req);
        }
    })?;

    Ok(serde_json::json!({
        "message": "Settings updated successfully",
        "updated_at": settings.updated_at.to_rfc3339(),
    }))
}

pub async fn reset_settings<R: SettingApiRepository>(repo: &R) -> Result<Value> {
    repo.reset()?;
    tracing::info!("Settings reset to defaults");

    Ok(serde_json::json!({ "message": "Settings reset successfully" }))
}
