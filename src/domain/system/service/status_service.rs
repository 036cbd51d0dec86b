use anyhow::Result;
use serde_json::{json, Value};

use crate::core::persistence::collection_fs_adapter_trait::CollectionApiRepository;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::core::persistence::shift::shift_entity::ShiftEntity;
use crate::core::persistence::shift_model::shift_model_entity::ShiftModelEntity;

pub async fn status<E, M, S>(employees: &E, models: &M, shifts: &S) -> Result<Value>
where
    E: CollectionApiRepository<EmployeeEntity>,
    M: CollectionApiRepository<ShiftModelEntity>,
    S: CollectionApiRepository<ShiftEntity>,
{
    Ok(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "employees": employees.list()?.len(),
        "shift_models": models.list()?.len(),
        "shifts": shifts.list()?.len(),
    }))
}

pub async fn health() -> Result<Value> {
    Ok(json!({ "status": "ok" }))
}
