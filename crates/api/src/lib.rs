// Path: crates/api/src/lib.rs

//! # IOI Kernel API Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
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
#![deny(missing_docs)]
//! # IOI Kernel API
//!
//! Core traits and interfaces for the parameter store. This crate defines the
//! key-value contract every backing store implements, the prefix-scoped views a
//! subspace works through, and the execution context that carries the persistent
//! and transient stores for the current block.

/// The execution context passed to every parameter store operation.
pub mod context;
/// Re-exports all core error types from the central `ioi-types` crate.
pub mod error;
/// Core traits for state management, including `StateAccess` and `StateOverlay`.
pub mod state;

/// A curated set of the most commonly used traits and types.
pub mod prelude {
    pub use crate::context::ExecContext;
    pub use crate::error::{ErrorCode, StateError};
    pub use crate::state::{
        MemoryStore, PrefixStore, ReadOnlyPrefixStore, StateAccess, StateOverlay,
    };
}
