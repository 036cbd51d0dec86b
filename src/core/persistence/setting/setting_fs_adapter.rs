use std::{
    fs::{self, File},
    io::{BufRead, BufReader, Write},
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::core::persistence::fixed_fs_adapter_trait::FixedFsAdapterTrait;

use super::setting_entity::SettingEntity;
use super::theme::Theme;

/// FS adapter for persisted settings.
///
/// Reads and writes a simple key-value file (`settings.rci`). Unknown keys
/// are ignored and missing keys keep their defaults.
pub struct SettingFsAdapter {
    path: PathBuf,
    lock: Mutex<()>,
}

impl SettingFsAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_unlocked(&self) -> Result<SettingEntity> {
        if !self.path.exists() {
            return Ok(SettingEntity::default());
        }

        let file = File::open(&self.path).context("Failed to open settings file")?;
        let reader = BufReader::new(file);
        let mut s = SettingEntity::default();

        for line in reader.lines() {
            let line = line?;
            if let Some((key, val)) = line.split_once(':') {
                let key = key.trim().to_uppercase();
                let val = val.trim();

                match key.as_str() {
                    "DISPLAY_NAME" => s.display_name = val.to_string(),
                    "EMAIL" => {
                        s.email = if val.is_empty() {
                            None
                        } else {
                            Some(val.to_string())
                        }
                    }
                    "THEME" => {
                        if let Some(theme) = Theme::from_code(val) {
                            s.theme = theme;
                        }
                    }
                    "LANGUAGE" => s.language = val.to_string(),
                    "CREATED_AT" => {
                        if let Ok(dt) = val.parse::<DateTime<Utc>>() {
                            s.created_at = dt;
                        }
                    }
                    "UPDATED_AT" => {
                        if let Ok(dt) = val.parse::<DateTime<Utc>>() {
                            s.updated_at = dt;
                        }
                    }
                    "VERSION" => s.version = val.to_string(),
                    _ => {}
                }
            }
        }

        Ok(s)
    }

    fn write_unlocked(&self, data: &SettingEntity) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create settings directory")?;
        }

        let tmp_path = self.path.with_extension("rci.tmp");
        let mut f = File::create(&tmp_path).context("Failed to create temp settings file")?;

        writeln!(f, "DISPLAY_NAME:{}", data.display_name)?;
        writeln!(f, "EMAIL:{}", data.email.clone().unwrap_or_default())?;
        writeln!(f, "THEME:{}", data.theme.as_code())?;
        writeln!(f, "LANGUAGE:{}", data.language)?;
        writeln!(f, "CREATED_AT:{}", data.created_at.to_rfc3339())?;
        writeln!(f, "UPDATED_AT:{}", data.updated_at.to_rfc3339())?;
        writeln!(f, "VERSION:{}", data.version)?;

        f.flush()?;
        f.sync_all().context("Failed to sync temp settings file")?;

        fs::rename(&tmp_path, &self.path).context("Failed to finalize settings file")?;
        Ok(())
    }
}

impl FixedFsAdapterTrait<SettingEntity> for SettingFsAdapter {
    fn read(&self) -> Result<SettingEntity> {
        let _guard = self.guard();
        self.read_unlocked()
    }

    fn delete(&self) -> Result<()> {
        let _guard = self.guard();
        if self.path.exists() {
            fs::remove_file(&self.path).context("Failed to delete settings file")?;
        }
        Ok(())
    }

    fn modify(&self, f: &mut dyn FnMut(&mut SettingEntity)) -> Result<SettingEntity> {
        let _guard = self.guard();
        let mut settings = self.read_unlocked()?;
        f(&mut settings);
        self.write_unlocked(&settings)?;
        Ok(settings)
    }
}
