// Path: crates/params/src/lib.rs
#![forbid(unsafe_code)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::todo,
        clippy::unimplemented,
        clippy::indexing_slicing
    )
)]

//! # IOI Parameter Store
//!
//! A typed, namespaced parameter store that modules use to hold their tunable
//! configuration and that governance mutates through parameter change proposals.
//!
//! Each module owns a [`Subspace`], named after the module, with a [`KeyTable`]
//! declaring every key it may hold together with the key's value type and
//! validator. Values are persisted as canonical JSON under `<subspace>/<key>` in
//! the persistent store, and every write marks the key in the transient store so
//! that [`Subspace::modified`] can report keys touched during the current block.
//!
//! The [`Keeper`] is the directory of subspaces. The
//! [`ParamChangeProposalHandler`] applies governance decisions atomically and the
//! [`Querier`] serves the read-only query surface.

/// The canonical consensus parameter table of the `baseapp` subspace.
pub mod consensus;
/// The registry of subspaces.
pub mod keeper;
/// Key tables mapping parameter keys to their value type and validator.
pub mod key_table;
/// Helpers for moving parameters written before key tables existed.
pub mod migrations;
/// Binding a module's parameter struct to its keys.
pub mod param_set;
/// The governance handler for parameter change proposals.
pub mod proposal;
/// The read-only query surface.
pub mod query;
/// The per-module facade over the parameter stores.
pub mod subspace;
/// The `ParamValue` trait and the value kinds it covers.
pub mod value;

mod attribute;

pub use keeper::Keeper;
pub use key_table::KeyTable;
pub use param_set::{ParamSet, ParamSetPair, ParamSetPairs};
pub use proposal::ParamChangeProposalHandler;
pub use query::Querier;
pub use subspace::Subspace;
pub use value::{accept_any, ParamValue, Validator};
