use anyhow::Result;

/// Storage backend for a single fixed record (e.g. settings).
pub trait FixedFsAdapterTrait<T>: Send + Sync {
    fn read(&self) -> Result<T>;

    fn delete(&self) -> Result<()>;

    /// Read, mutate and write back while holding the adapter's lock.
    fn modify(&self, f: &mut dyn FnMut(&mut T)) -> Result<T>;
}
