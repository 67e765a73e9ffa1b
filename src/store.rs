//! Generic in-memory entity store.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Authoritative in-memory ordered collection for one entity type.
///
/// The store hands out clones, never references, so callers cannot alias
/// the records it owns. All reads and writes go through the service layer;
/// each mutation runs its whole read-modify-write under the one write
/// guard, which keeps id assignment race-free on a multithreaded runtime.
///
/// Clones share the underlying collection.
#[derive(Debug, Clone)]
pub struct Store<T> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Clone> Store<T> {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// A store seeded with a structural copy of the fixture slice.
    /// The seed itself is never aliased or mutated afterwards.
    pub fn seeded(seed: &[T]) -> Self {
        Self {
            records: Arc::new(RwLock::new(seed.to_vec())),
        }
    }

    /// Clone of every record, in insertion order.
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Run a closure against the records under the read guard.
    pub(crate) async fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.records.read().await)
    }

    /// Run a closure against the records under the write guard.
    pub(crate) async fn write<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        f(&mut *self.records.write().await)
    }
}

impl<T: Clone> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Id assignment rule shared by the integer-keyed stores: one past the
/// current maximum, or 1 for an empty collection.
pub(crate) fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}
