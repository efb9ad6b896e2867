// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]
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

//! # IOI Kernel Types
//!
//! This crate is the foundational library for the IOI parameter store, containing
//! the canonical codecs, error types, configuration objects and the wire types
//! exchanged with governance and the query surface.
//!
//! ## Architectural Role
//!
//! As the base crate, `ioi-types` has minimal dependencies and is itself a
//! dependency for every other crate in the workspace. This structure prevents
//! circular dependencies and provides a stable, canonical definition for shared
//! types like `ParameterChangeProposal`, `Dec`, `Coin` and the error enums.

/// The maximum size in bytes for a single parameter value written to state.
pub const MAX_PARAM_VALUE_BYTES: usize = 64 * 1024; // 64 KiB

/// Governance and query wire types for the parameter store.
pub mod app;
/// The canonical, deterministic codecs for consensus-critical state.
pub mod codec;
/// Configuration structures for the parameter keeper and proposal limits.
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;
/// Helpers for building and validating parameter store keys.
pub mod keys;
/// The closed set of value kinds a parameter may hold, plus `Dec` and `Coin`.
pub mod params;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
