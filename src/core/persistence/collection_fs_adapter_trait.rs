use anyhow::Result;

/// Records stored in a collection are addressed by a string id.
pub trait Identified {
    fn id(&self) -> &str;
}

/// Storage backend for a whole collection of records.
///
/// `modify` runs the closure against the current rows and persists them only
/// when it reports a change. Implementations must serialise concurrent calls.
pub trait CollectionFsAdapterTrait<T>: Send + Sync {
    fn read_all(&self) -> Result<Vec<T>>;

    fn modify(&self, f: &mut dyn FnMut(&mut Vec<T>) -> Result<bool>) -> Result<()>;
}

/// API-facing repository abstraction over a collection adapter.
pub trait CollectionApiRepository<T>: Send + Sync
where
    T: Identified + Clone,
{
    fn fs_adapter(&self) -> &dyn CollectionFsAdapterTrait<T>;

    fn list(&self) -> Result<Vec<T>> {
        self.fs_adapter().read_all()
    }

    fn find(&self, id: &str) -> Result<Option<T>> {
        Ok(self.list()?.into_iter().find(|row| row.id() == id))
    }

    fn insert(&self, entity: &T) -> Result<()> {
        self.fs_adapter().modify(&mut |rows| {
            rows.push(entity.clone());
            Ok(true)
        })
    }

    /// Replace the row with the same id. Returns `false` when it does not exist.
    fn update(&self, entity: &T) -> Result<bool> {
        let mut found = false;
        self.fs_adapter().modify(&mut |rows| {
            if let Some(row) = rows.iter_mut().find(|r| r.id() == entity.id()) {
                *row = entity.clone();
                found = true;
            }
            Ok(found)
        })?;
        Ok(found)
    }

    /// Remove the row with the given id. Returns `false` when it does not exist.
    fn delete(&self, id: &str) -> Result<bool> {
        let mut found = false;
        self.fs_adapter().modify(&mut |rows| {
            let before = rows.len();
            rows.retain(|r| r.id() != id);
            found = rows.len() != before;
            Ok(found)
        })?;
        Ok(found)
    }
}
