// Path: crates/api/src/state/prefix.rs

//! State access wrappers that confine every key to a single prefix.
//!
//! A subspace reaches the persistent and transient stores only through these
//! views, so it can never read or write outside `name + "/"`.

use crate::state::{StateAccess, StateError, StateScanIter};
use std::sync::Arc;

#[inline]
fn qualify(prefix: &[u8], key: &[u8]) -> Vec<u8> {
    [prefix, key].concat()
}

/// Strips `prefix_len` bytes from every key yielded by `iter`.
fn strip_scan(iter: StateScanIter<'_>, prefix_len: usize) -> StateScanIter<'_> {
    Box::new(iter.map(move |item| {
        item.and_then(|(key, value)| match key.get(prefix_len..) {
            Some(rest) => Ok((Arc::from(rest), value)),
            None => Err(StateError::Backend(
                "prefix scan returned a key outside its prefix".to_string(),
            )),
        })
    }))
}

/// A wrapper that provides prefixed, isolated read-write access to a `StateAccess` object.
pub struct PrefixStore<'a> {
    inner: &'a mut dyn StateAccess,
    prefix: Vec<u8>,
}

impl<'a> PrefixStore<'a> {
    /// Creates a new view of `inner` confined to `prefix`.
    pub fn new(inner: &'a mut dyn StateAccess, prefix: Vec<u8>) -> Self {
        Self { inner, prefix }
    }

    /// The prefix prepended to every key.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }
}

impl<'a> StateAccess for PrefixStore<'a> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        self.inner.get(&qualify(&self.prefix, key))
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.inner.insert(&qualify(&self.prefix, key), value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.inner.delete(&qualify(&self.prefix, key))
    }

    fn has(&self, key: &[u8]) -> Result<bool, StateError> {
        self.inner.has(&qualify(&self.prefix, key))
    }

    fn batch_set(&mut self, updates: &[(Vec<u8>, Vec<u8>)]) -> Result<(), StateError> {
        let mapped: Vec<(Vec<u8>, Vec<u8>)> = updates
            .iter()
            .map(|(k, v)| (qualify(&self.prefix, k), v.clone()))
            .collect();
        self.inner.batch_set(&mapped)
    }

    fn batch_get(&self, keys: &[Vec<u8>]) -> Result<Vec<Option<Vec<u8>>>, StateError> {
        let mapped: Vec<Vec<u8>> = keys.iter().map(|k| qualify(&self.prefix, k)).collect();
        self.inner.batch_get(&mapped)
    }

    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        let mapped_inserts: Vec<(Vec<u8>, Vec<u8>)> = inserts
            .iter()
            .map(|(k, v)| (qualify(&self.prefix, k), v.clone()))
            .collect();
        let mapped_deletes: Vec<Vec<u8>> =
            deletes.iter().map(|k| qualify(&self.prefix, k)).collect();
        self.inner.batch_apply(&mapped_inserts, &mapped_deletes)
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let iter = self.inner.prefix_scan(&qualify(&self.prefix, prefix))?;
        Ok(strip_scan(iter, self.prefix.len()))
    }
}

/// A read-only version of `PrefixStore` that wraps an immutable reference
/// to `StateAccess`.
///
/// Used by getters and queries so that reads never require mutable access to the
/// execution context. Every write is rejected with `PermissionDenied`.
pub struct ReadOnlyPrefixStore<'a> {
    inner: &'a dyn StateAccess,
    prefix: Vec<u8>,
}

impl<'a> ReadOnlyPrefixStore<'a> {
    /// Creates a new read-only view of `inner` confined to `prefix`.
    pub fn new(inner: &'a dyn StateAccess, prefix: Vec<u8>) -> Self {
        Self { inner, prefix }
    }

    /// The prefix prepended to every key.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    fn denied(&self, key: &[u8]) -> StateError {
        StateError::PermissionDenied(format!(
            "write to '{}' through a read-only view",
            String::from_utf8_lossy(&qualify(&self.prefix, key))
        ))
    }
}

impl<'a> StateAccess for ReadOnlyPrefixStore<'a> {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        self.inner.get(&qualify(&self.prefix, key))
    }

    fn insert(&mut self, key: &[u8], _value: &[u8]) -> Result<(), StateError> {
        Err(self.denied(key))
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        Err(self.denied(key))
    }

    fn has(&self, key: &[u8]) -> Result<bool, StateError> {
        self.inner.has(&qualify(&self.prefix, key))
    }

    fn batch_set(&mut self, updates: &[(Vec<u8>, Vec<u8>)]) -> Result<(), StateError> {
        match updates.first() {
            Some((key, _)) => Err(self.denied(key)),
            None => Ok(()),
        }
    }

    fn batch_get(&self, keys: &[Vec<u8>]) -> Result<Vec<Option<Vec<u8>>>, StateError> {
        let mapped: Vec<Vec<u8>> = keys.iter().map(|k| qualify(&self.prefix, k)).collect();
        self.inner.batch_get(&mapped)
    }

    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        let first = inserts.first().map(|(k, _)| k).or_else(|| deletes.first());
        match first {
            Some(key) => Err(self.denied(key)),
            None => Ok(()),
        }
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let iter = self.inner.prefix_scan(&qualify(&self.prefix, prefix))?;
        Ok(strip_scan(iter, self.prefix.len()))
    }
}
