use anyhow::Result;

use crate::core::persistence::collection_fs_adapter_trait::CollectionApiRepository;

use super::shift_entity::ShiftEntity;

/// Shift-specific queries on top of the generic collection repository.
pub trait ShiftApiRepository: CollectionApiRepository<ShiftEntity> {
    fn list_by_employee(&self, employee_id: &str) -> Result<Vec<ShiftEntity>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|s| s.employee_id == employee_id)
            .collect())
    }

    /// Remove every shift of an employee, returning how many were removed.
    fn delete_by_employee(&self, employee_id: &str) -> Result<usize> {
        let mut removed = 0;
        self.fs_adapter().modify(&mut |rows| {
            let before = rows.len();
            rows.retain(|s| s.employee_id != employee_id);
            removed = before - rows.len();
            Ok(removed > 0)
        })?;
        Ok(removed)
    }
}

impl<R: CollectionApiRepository<ShiftEntity>> ShiftApiRepository for R {}
