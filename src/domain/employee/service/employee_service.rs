use anyhow::Result;
use serde_json::{json, Value};
use tracing::info;
use validator::Validate;

use crate::api::dto::paginated_response::{PaginatedResponse, PaginationQuery};
use crate::core::persistence::collection_fs_adapter_trait::CollectionApiRepository;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::core::persistence::shift::shift_api_repository_trait::ShiftApiRepository;
use crate::domain::employee::dto::employee_upsert_request::EmployeeUpsertRequest;
use crate::errors::AppError;

pub async fn list_employees<R: CollectionApiRepository<EmployeeEntity>>(
    repo: &R,
    query: PaginationQuery,
) -> Result<PaginatedResponse<EmployeeEntity>> {
    let mut employees = repo.list()?;
    employees.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(PaginatedResponse::from_sorted(employees, &query))
}

pub async fn get_employee<R: CollectionApiRepository<EmployeeEntity>>(
    repo: &R,
    id: String,
) -> Result<EmployeeEntity> {
    repo.find(&id)?
        .ok_or_else(|| AppError::NotFound(format!("employee {id}")).into())
}

pub async fn create_employee<R: CollectionApiRepository<EmployeeEntity>>(
    repo: &R,
    req: EmployeeUpsertRequest,
) -> Result<EmployeeEntity> {
    req.validate()?;

    let employee = EmployeeEntity::new(req.name.trim().to_string());
    repo.insert(&employee)?;

    info!(employee_id = %employee.id, "Employee created");
    Ok(employee)
}

pub async fn update_employee<R: CollectionApiRepository<EmployeeEntity>>(
    repo: &R,
    id: String,
    req: EmployeeUpsertRequest,
) -> Result<EmployeeEntity> {
    req.validate()?;

    let mut employee = get_employee(repo, id).await?;
    employee.rename(req.name.trim().to_string());

    if !repo.update(&employee)? {
        return Err(AppError::NotFound(format!("employee {}", employee.id)).into());
    }
    Ok(employee)
}

/// Removes the employee together with every shift assigned to them.
pub async fn delete_employee<E, S>(employees: &E, shifts: &S, id: String) -> Result<Value>
where
    E: CollectionApiRepository<EmployeeEntity>,
    S: ShiftApiRepository,
{
    if employees.find(&id)?.is_none() {
        return Err(AppError::NotFound(format!("employee {id}")).into());
    }
    // the employee row must outlive a failed cascade
    let deleted_shifts = shifts.delete_by_employee(&id)?;
    if !employees.delete(&id)? {
        return Err(AppError::NotFound(format!("employee {id}")).into());
    }

    info!(employee_id = %id, deleted_shifts, "Employee deleted");
    Ok(json!({
        "message": "Employee deleted successfully",
        "deleted_shifts": deleted_shifts,
    }))
}
