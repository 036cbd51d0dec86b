//! In-memory adapters backing service tests.

use std::sync::Mutex;

use anyhow::Result;

use super::collection_fs_adapter_trait::{
    CollectionApiRepository, CollectionFsAdapterTrait, Identified,
};
use super::fixed_fs_adapter_trait::FixedFsAdapterTrait;

pub struct MemoryCollectionAdapter<T> {
    rows: Mutex<Vec<T>>,
}

impl<T> Default for MemoryCollectionAdapter<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Clone + Send> CollectionFsAdapterTrait<T> for MemoryCollectionAdapter<T> {
    fn read_all(&self) -> Result<Vec<T>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn modify(&self, f: &mut dyn FnMut(&mut Vec<T>) -> Result<bool>) -> Result<()> {
        let mut guard = self.rows.lock().unwrap();
        let mut rows = guard.clone();
        if f(&mut rows)? {
            *guard = rows;
        }
        Ok(())
    }
}

pub struct MemoryRepository<T> {
    pub adapter: MemoryCollectionAdapter<T>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            adapter: MemoryCollectionAdapter::default(),
        }
    }
}

impl<T: Identified + Clone + Send> MemoryRepository<T> {
    pub fn with_rows(rows: Vec<T>) -> Self {
        let repo = Self::default();
        *repo.adapter.rows.lock().unwrap() = rows;
        repo
    }

    pub fn rows(&self) -> Vec<T> {
        self.adapter.rows.lock().unwrap().clone()
    }
}

impl<T: Identified + Clone + Send> CollectionApiRepository<T> for MemoryRepository<T> {
    fn fs_adapter(&self) -> &dyn CollectionFsAdapterTrait<T> {
        &self.adapter
    }
}

#[derive(Default)]
pub struct MemoryFixedAdapter<T> {
    pub state: Mutex<T>,
}

impl<T: Clone + Default + Send> FixedFsAdapterTrait<T> for MemoryFixedAdapter<T> {
    fn read(&self) -> Result<T> {
        Ok(self.state.lock().unwrap().clone())
    }

    fn delete(&self) -> Result<()> {
        *self.state.lock().unwrap() = T::default();
        Ok(())
    }

    fn modify(&self, f: &mut dyn FnMut(&mut T)) -> Result<T> {
        let mut guard = self.state.lock().unwrap();
        f(&mut guard);
        Ok(guard.clone())
    }
}
