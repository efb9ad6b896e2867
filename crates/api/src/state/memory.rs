// Path: crates/api/src/state/memory.rs

//! An ordered, in-memory `StateAccess` backend.

use crate::state::{StateAccess, StateError, StateScanIter};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A `BTreeMap`-backed store.
///
/// Hosts use it as the transient store, which is cleared at every block boundary,
/// and tests use it as the persistent store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// The number of stored entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over every entry in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.data.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}

impl StateAccess for MemoryStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        Ok(self.data.get(key).cloned())
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.data.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.data.remove(key);
        Ok(())
    }

    fn has(&self, key: &[u8]) -> Result<bool, StateError> {
        Ok(self.data.contains_key(key))
    }

    fn batch_set(&mut self, updates: &[(Vec<u8>, Vec<u8>)]) -> Result<(), StateError> {
        for (key, value) in updates {
            self.data.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    fn batch_get(&self, keys: &[Vec<u8>]) -> Result<Vec<Option<Vec<u8>>>, StateError> {
        Ok(keys.iter().map(|k| self.data.get(k).cloned()).collect())
    }

    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        for key in deletes {
            self.data.remove(key);
        }
        self.batch_set(inserts)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let owned_prefix = prefix.to_vec();
        let iter = self
            .data
            .range(prefix.to_vec()..)
            .take_while(move |(k, _)| k.starts_with(&owned_prefix))
            .map(|(k, v)| Ok((Arc::from(k.as_slice()), Arc::from(v.as_slice()))));
        Ok(Box::new(iter))
    }
}
