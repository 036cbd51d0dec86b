use std::path::{Path, PathBuf};

pub fn employees_path(data_dir: &Path) -> PathBuf {
    data_dir.join("employees.rcd")
}

pub fn shifts_path(data_dir: &Path) -> PathBuf {
    data_dir.join("shifts.rcd")
}

pub fn shift_models_path(data_dir: &Path) -> PathBuf {
    data_dir.join("shift_models.rcd")
}

pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join("settings.rci")
}

/// Daily log file written by the rolling appender, e.g. `shiftdesk.log.2026-10-19`.
pub fn log_file_path(log_dir: &Path, date: &str) -> PathBuf {
    log_dir.join(format!("{}.{}", LOG_FILE_PREFIX, date))
}

pub const LOG_FILE_PREFIX: &str = "shiftdesk.log";
