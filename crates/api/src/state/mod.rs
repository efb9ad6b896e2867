// Path: crates/api/src/state/mod.rs
//! Core traits for state management.
//!
//! This module defines the primary interfaces for interacting with parameter state:
//! - `StateAccess`: basic key-value store operations, including ordered prefix scans.
//! - `MemoryStore`: an ordered in-memory store, used for transient block state and tests.
//! - `PrefixStore` / `ReadOnlyPrefixStore`: views confined to a single key prefix.
//! - `StateOverlay`: a copy-on-write buffer whose writes can be committed or dropped.

use ioi_types::error::StateError;
use std::sync::Arc;

// --- Type Aliases for common state patterns ---
/// An atomically reference-counted, owned key slice.
pub type StateKey = Arc<[u8]>;
/// An atomically reference-counted, owned value slice.
pub type StateVal = Arc<[u8]>;
/// An owned key-value pair from the state, using cheap-to-clone Arcs.
pub type StateKVPair = (StateKey, StateVal);
/// A streaming iterator over key-value pairs from the state, in ascending key order.
/// `Sync` is omitted as iterators are stateful.
pub type StateScanIter<'a> = Box<dyn Iterator<Item = Result<StateKVPair, StateError>> + Send + 'a>;

// --- Module Structure ---

mod accessor;
mod memory;
mod overlay;
pub mod prefix;

#[cfg(test)]
mod tests;

// --- Public Exports ---

pub use accessor::*;
pub use memory::MemoryStore;
pub use overlay::*;
pub use prefix::{PrefixStore, ReadOnlyPrefixStore};
