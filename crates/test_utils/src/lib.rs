// Path: crates/test_utils/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # IOI Kernel Test Utilities
//!
//! Assertion macros and in-memory store fixtures for testing the parameter store.

pub mod assertions;
pub mod fixtures;

#[doc(hidden)]
pub use ioi_api::error::ErrorCode;
