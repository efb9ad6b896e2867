// Path: crates/types/src/keys/mod.rs
//! Defines constants and helpers for parameter store keys.
//!
//! Both the persistent and the transient store use the same layout:
//! `<subspace_name> "/" <key_bytes>`. In the persistent store the value is the
//! canonical JSON encoding of the parameter; in the transient store the value is
//! empty and its presence marks the key as modified during the current block.

/// The separator placed between a subspace name and a parameter key.
pub const SUBSPACE_SEPARATOR: &[u8] = b"/";

/// The default name of the persistent store backing the parameter keeper.
pub const PARAMS_STORE_KEY: &str = "params";

/// The default name of the transient store backing the parameter keeper.
pub const PARAMS_TRANSIENT_STORE_KEY: &str = "transient_params";

/// The value written to the transient store to mark a key as modified.
pub const MODIFIED_MARKER: &[u8] = b"";

/// Builds the store prefix for a subspace.
///
/// # Example
/// `subspace_prefix("staking")` -> `b"staking/"`
pub fn subspace_prefix(name: &str) -> Vec<u8> {
    [name.as_bytes(), SUBSPACE_SEPARATOR].concat()
}

/// Builds the full store key of a parameter within a subspace.
pub fn param_store_key(subspace: &str, key: &[u8]) -> Vec<u8> {
    [subspace.as_bytes(), SUBSPACE_SEPARATOR, key].concat()
}

/// Returns true if `key` is non-empty and every byte is ASCII alphanumeric.
pub fn is_valid_param_key(key: &[u8]) -> bool {
    !key.is_empty() && key.iter().all(u8::is_ascii_alphanumeric)
}

/// Renders a key for error messages and logs.
pub fn display_key(key: &[u8]) -> String {
    String::from_utf8_lossy(key).into_owned()
}
