use std::path::Path;

use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;
use crate::core::persistence::storage_path::settings_path;

use super::setting_api_repository_trait::SettingApiRepository;
use super::setting_entity::SettingEntity;
use super::setting_fs_adapter::SettingFsAdapter;

pub struct SettingRepository {
    adapter: SettingFsAdapter,
}

impl SettingRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            adapter: SettingFsAdapter::new(settings_path(data_dir)),
        }
    }
}

impl SettingApiRepository for SettingRepository {
    fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<SettingEntity> {
        &self.adapter
    }
}
