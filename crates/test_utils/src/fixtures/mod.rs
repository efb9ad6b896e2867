//! Store fixtures that mimic a host executing consecutive blocks.

use ioi_api::prelude::{ExecContext, MemoryStore, StateAccess, StateError};
use ioi_api::state::StateScanIter;

/// A persistent and a transient in-memory store plus the current block height.
///
/// `ctx()` hands out an execution context for the current block; `end_block()`
/// discards the transient store and advances the height, as a host does at commit.
#[derive(Debug, Default)]
pub struct TestStores {
    /// The persistent parameter store.
    pub state: MemoryStore,
    /// The per-block transient store.
    pub transient: MemoryStore,
    /// The height of the block currently being executed.
    pub height: u64,
}

impl TestStores {
    /// Creates empty stores positioned at height 1.
    pub fn new() -> Self {
        Self {
            height: 1,
            ..Self::default()
        }
    }

    /// An execution context for the current block.
    pub fn ctx(&mut self) -> ExecContext<'_> {
        ExecContext::new(&mut self.state, &mut self.transient, self.height)
    }

    /// Commits the current block: clears the transient store and advances the height.
    pub fn end_block(&mut self) {
        self.transient.clear();
        self.height += 1;
    }

    /// Reads a raw entry from the persistent store by its full key.
    pub fn raw(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.state.get(key).ok().flatten()
    }

    /// A copy of the persistent store, for before/after comparisons.
    pub fn snapshot(&self) -> MemoryStore {
        self.state.clone()
    }
}

/// A store whose reads are served from `inner` and whose every write fails with
/// `StateError::Backend`. Stands in for a backend that loses its connection mid-block.
#[derive(Debug, Default)]
pub struct FailingStore {
    /// The readable contents.
    pub inner: MemoryStore,
}

impl FailingStore {
    fn refuse(&self) -> StateError {
        StateError::Backend("write refused".to_string())
    }
}

impl StateAccess for FailingStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        self.inner.get(key)
    }
    fn insert(&mut self, _key: &[u8], _value: &[u8]) -> Result<(), StateError> {
        Err(self.refuse())
    }
    fn delete(&mut self, _key: &[u8]) -> Result<(), StateError> {
        Err(self.refuse())
    }
    fn batch_set(&mut self, _updates: &[(Vec<u8>, Vec<u8>)]) -> Result<(), StateError> {
        Err(self.refuse())
    }
    fn batch_get(&self, keys: &[Vec<u8>]) -> Result<Vec<Option<Vec<u8>>>, StateError> {
        self.inner.batch_get(keys)
    }
    fn batch_apply(
        &mut self,
        _inserts: &[(Vec<u8>, Vec<u8>)],
        _deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        Err(self.refuse())
    }
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        self.inner.prefix_scan(prefix)
    }
}
