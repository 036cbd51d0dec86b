use anyhow::Result;
use serde_json::{json, Value};
use tracing::info;
use validator::Validate;

use crate::core::persistence::collection_fs_adapter_trait::CollectionApiRepository;
use crate::core::persistence::shift_model::shift_model_entity::ShiftModelEntity;
use crate::domain::shift_model::dto::shift_model_upsert_request::ShiftModelUpsertRequest;
use crate::errors::AppError;

pub async fn list_shift_models<R: CollectionApiRepository<ShiftModelEntity>>(
    repo: &R,
) -> Result<Vec<ShiftModelEntity>> {
    let mut models = repo.list()?;
    models.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.name.cmp(&b.name)));
    Ok(models)
}

pub async fn get_shift_model<R: CollectionApiRepository<ShiftModelEntity>>(
    repo: &R,
    id: String,
) -> Result<ShiftModelEntity> {
    repo.find(&id)?
        .ok_or_else(|| AppError::NotFound(format!("shift model {id}")).into())
}

pub async fn create_shift_model<R: CollectionApiRepository<ShiftModelEntity>>(
    repo: &R,
    req: ShiftModelUpsertRequest,
) -> Result<ShiftModelEntity> {
    req.validate()?;

    let model = ShiftModelEntity::new(req.name.trim().to_string(), req.start, req.end);
    repo.insert(&model)?;

    info!(shift_model_id = %model.id, "Shift model created");
    Ok(model)
}

pub async fn update_shift_model<R: CollectionApiRepository<ShiftModelEntity>>(
    repo: &R,
    id: String,
    req: ShiftModelUpsertRequest,
) -> Result<ShiftModelEntity> {
    req.validate()?;

    let mut model = get_shift_model(repo, id).await?;
    model.apply_update(req.name.trim().to_string(), req.start, req.end);

    if !repo.update(&model)? {
        return Err(AppError::NotFound(format!("shift model {}", model.id)).into());
    }
    Ok(model)
}

/// Shifts created from the template keep their own copy of the times.
pub async fn delete_shift_model<R: CollectionApiRepository<ShiftModelEntity>>(
    repo: &R,
    id: String,
) -> Result<Value> {
    if !repo.delete(&id)? {
        return Err(AppError::NotFound(format!("shift model {id}")).into());
    }

    info!(shift_model_id = %id, "Shift model deleted");
    Ok(json!({ "message": "Shift model deleted successfully" }))
}
