use std::{
    fs::{self, File},
    io::{BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::core::persistence::storage_path::{log_file_path, LOG_FILE_PREFIX};
use crate::errors::AppError;

/// Read access to the daily log files written by the rolling appender.
pub trait LogRepository: Send + Sync {
    /// File names, newest first.
    fn get_logs(&self) -> Result<Vec<String>>;

    /// Lines `[cursor, cursor + limit)` of the given day, plus whether more follow.
    fn get_log_lines(&self, date: &str, cursor: usize, limit: usize) -> Result<(Vec<String>, bool)>;
}

pub struct LogRepositoryImpl {
    log_dir: PathBuf,
}

impl LogRepositoryImpl {
    pub fn new(log_dir: PathBuf) -> Self {
        Self { log_dir }
    }
}

impl LogRepository for LogRepositoryImpl {
    fn get_logs(&self) -> Result<Vec<String>> {
        if !self.log_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names: Vec<String> = fs::read_dir(&self.log_dir)
            .with_context(|| format!("Failed to read log directory {:?}", self.log_dir))?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.starts_with(LOG_FILE_PREFIX))
            .collect();

        // date suffix sorts lexicographically
        names.sort_unstable_by(|a, b| b.cmp(a));
        Ok(names)
    }

    fn get_log_lines(&self, date: &str, cursor: usize, limit: usize) -> Result<(Vec<String>, bool)> {
        // only a real date may reach the filesystem
        if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            return Err(AppError::ValidationError(format!("invalid log date '{date}'")).into());
        }

        let path = log_file_path(&self.log_dir, date);
        if !path.exists() {
            return Err(AppError::NotFound(format!("log file for {date}")).into());
        }

        let file = File::open(&path).with_context(|| format!("Failed to open {:?}", path))?;
        let mut lines = BufReader::new(file).lines().skip(cursor);

        let mut page = Vec::with_capacity(limit);
        for line in lines.by_ref().take(limit) {
            page.push(line?);
        }
        let has_more = lines.next().is_some();

        Ok((page, has_more))
    }
}
