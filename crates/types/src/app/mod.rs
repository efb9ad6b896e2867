// Path: crates/types/src/app/mod.rs
//! Governance and query wire types for the parameter store.

/// Data structures for parameter change proposals decided by governance.
pub mod proposal;
/// Request and response types of the read-only query surface.
pub mod query;

pub use proposal::*;
pub use query::*;
