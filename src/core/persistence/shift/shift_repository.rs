use std::path::Path;

use crate::core::persistence::collection_fs_adapter_trait::{
    CollectionApiRepository, CollectionFsAdapterTrait,
};
use crate::core::persistence::storage_path::shifts_path;

use super::shift_entity::ShiftEntity;
use super::shift_fs_adapter::ShiftFsAdapter;

pub struct ShiftRepository {
    adapter: ShiftFsAdapter,
}

impl ShiftRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            adapter: ShiftFsAdapter::new(shifts_path(data_dir)),
        }
    }
}

impl CollectionApiRepository<ShiftEntity> for ShiftRepository {
    fn fs_adapter(&self) -> &dyn CollectionFsAdapterTrait<ShiftEntity> {
        &self.adapter
    }
}
