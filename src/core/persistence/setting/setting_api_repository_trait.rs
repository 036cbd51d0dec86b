use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;

use super::setting_entity::SettingEntity;

/// API-facing repository abstraction for account settings.
pub trait SettingApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn FixedFsAdapterTrait<SettingEntity>;

    fn read(&self) -> anyhow::Result<SettingEntity> {
        self.fs_adapter().read()
    }

    fn update_with(&self, f: &mut dyn FnMut(&mut SettingEntity)) -> anyhow::Result<SettingEntity> {
        self.fs_adapter().modify(f)
    }

    /// Drop the stored settings so the next read yields defaults.
    fn reset(&self) -> anyhow::Result<()> {
        self.fs_adapter().delete()
    }
}
