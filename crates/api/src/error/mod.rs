// Path: crates/api/src/error/mod.rs
// Re-export all core error types from the central types crate.
pub use ioi_types::error::{
    ConfigError, ErrorCode, ParamError, ProposalError, QueryError, QueryStatus,
    RegistrationError, StateError,
};
