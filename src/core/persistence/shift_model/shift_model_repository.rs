use std::path::Path;

use crate::core::persistence::collection_fs_adapter_trait::{
    CollectionApiRepository, CollectionFsAdapterTrait,
};
use crate::core::persistence::storage_path::shift_models_path;

use super::shift_model_entity::ShiftModelEntity;
use super::shift_model_fs_adapter::ShiftModelFsAdapter;

pub struct ShiftModelRepository {
    adapter: ShiftModelFsAdapter,
}

impl ShiftModelRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            adapter: ShiftModelFsAdapter::new(shift_models_path(data_dir)),
        }
    }
}

impl CollectionApiRepository<ShiftModelEntity> for ShiftModelRepository {
    fn fs_adapter(&self) -> &dyn CollectionFsAdapterTrait<ShiftModelEntity> {
        &self.adapter
    }
}
