use std::path::Path;

use crate::core::persistence::collection_fs_adapter_trait::{
    CollectionApiRepository, CollectionFsAdapterTrait,
};
use crate::core::persistence::storage_path::employees_path;

use super::employee_entity::EmployeeEntity;
use super::employee_fs_adapter::EmployeeFsAdapter;

pub struct EmployeeRepository {
    adapter: EmployeeFsAdapter,
}

impl EmployeeRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            adapter: EmployeeFsAdapter::new(employees_path(data_dir)),
        }
    }
}

impl CollectionApiRepository<EmployeeEntity> for EmployeeRepository {
    fn fs_adapter(&self) -> &dyn CollectionFsAdapterTrait<EmployeeEntity> {
        &self.adapter
    }
}
