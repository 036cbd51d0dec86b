use std::{
    fs::{self, File},
    io::{BufRead, BufReader, BufWriter, Write},
    marker::PhantomData,
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use anyhow::{Context, Result};
use tracing::warn;

use super::collection_fs_adapter_trait::CollectionFsAdapterTrait;

/// Line encoding for one record of a `|`-separated row file.
pub trait RowCodec: Sized {
    fn encode_row(&self) -> String;

    fn decode_row(line: &str) -> Option<Self>;
}

/// Collection adapter storing one record per line.
///
/// The whole file is rewritten on every change through a `.tmp` sibling that
/// is fsynced and renamed into place. A missing file reads as empty.
pub struct RowFileFsAdapter<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _rows: PhantomData<fn() -> T>,
}

impl<T: RowCodec> RowFileFsAdapter<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
            _rows: PhantomData,
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_rows(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {:?}", self.path))?;
        let reader = BufReader::new(file);
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match T::decode_row(&line) {
                Some(row) => rows.push(row),
                None => warn!(path = ?self.path, line = idx + 1, "Skipping malformed row"),
            }
        }

        Ok(rows)
    }

    fn write_rows(&self, rows: &[T]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {:?}", dir))?;
        }

        let tmp_path = self.path.with_extension("tmp");
        let file = File::create(&tmp_path)
            .with_context(|| format!("Failed to create temp file {:?}", tmp_path))?;
        let mut writer = BufWriter::new(file);

        for row in rows {
            writeln!(writer, "{}", row.encode_row())?;
        }

        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all().context("Failed to sync temp file")?;

        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to finalize {:?}", self.path))?;
        Ok(())
    }
}

impl<T: RowCodec> CollectionFsAdapterTrait<T> for RowFileFsAdapter<T> {
    fn read_all(&self) -> Result<Vec<T>> {
        let _guard = self.guard();
        self.read_rows()
    }

    fn modify(&self, f: &mut dyn FnMut(&mut Vec<T>) -> Result<bool>) -> Result<()> {
        let _guard = self.guard();
        let mut rows = self.read_rows()?;
        if f(&mut rows)? {
            self.write_rows(&rows)?;
        }
        Ok(())
    }
}

/// Empty fields encode `None`.
pub fn opt_field(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or_default()
}

pub fn parse_opt_field(v: &str) -> Option<String> {
    if v.is_empty() {
        None
    } else {
        Some(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        key: String,
        value: u32,
    }

    impl RowCodec for Pair {
        fn encode_row(&self) -> String {
            format!("{}|{}", self.key, self.value)
        }

        fn decode_row(line: &str) -> Option<Self> {
            let (key, value) = line.split_once('|')?;
            Some(Pair {
                key: key.to_string(),
                value: value.parse().ok()?,
            })
        }
    }

    fn pair(key: &str, value: u32) -> Pair {
        Pair { key: key.into(), value }
    }

    #[test]
    fn missing_file_reads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let adapter: RowFileFsAdapter<Pair> = RowFileFsAdapter::new(dir.path().join("pairs.rcd"));

        assert!(adapter.read_all().unwrap().is_empty());
    }

    #[test]
    fn modify_persists_only_on_change() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("pairs.rcd");
        let adapter: RowFileFsAdapter<Pair> = RowFileFsAdapter::new(path.clone());

        adapter.modify(&mut |_rows| Ok(false)).unwrap();
        assert!(!path.exists());

        adapter
            .modify(&mut |rows| {
                rows.push(pair("a", 1));
                rows.push(pair("b", 2));
                Ok(true)
            })
            .unwrap();

        assert_eq!(adapter.read_all().unwrap(), vec![pair("a", 1), pair("b", 2)]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "a|1\nb|2\n");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pairs.rcd");
        fs::write(&path, "a|1\ngarbage\n\nb|x\nc|3\n").unwrap();
        let adapter: RowFileFsAdapter<Pair> = RowFileFsAdapter::new(path);

        assert_eq!(adapter.read_all().unwrap(), vec![pair("a", 1), pair("c", 3)]);
    }

    #[test]
    fn failing_closure_leaves_file_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("pairs.rcd");
        fs::write(&path, "a|1\n").unwrap();
        let adapter: RowFileFsAdapter<Pair> = RowFileFsAdapter::new(path.clone());

        let result = adapter.modify(&mut |rows| {
            rows.clear();
            anyhow::bail!("nope")
        });

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "a|1\n");
    }
}
