// crates/types/src/codec.rs

//! Defines the canonical, deterministic codecs for all consensus-critical state.
//!
//! Two encodings are used side by side:
//!
//! - **SCALE** (`parity-scale-codec`) for governance envelopes and query wire types.
//!   It is compact and deterministic, and decoding fails fast on trailing bytes.
//! - **Canonical JSON** (RFC 8785, via `serde_jcs`) for parameter values. Object keys
//!   are sorted and numbers are printed in a single normal form, so two semantically
//!   equal values always produce byte-equal output. Governance proposals carry
//!   parameter values in this form, which allows partial objects to be merged onto
//!   the value already in state.
//!
//! By centralizing the codec logic here in the base `types` crate, we ensure that
//! all components use the exact same serialization format for state, preventing
//! consensus failures due to different binary representations of the same data.

use parity_scale_codec::{Decode, DecodeAll, Encode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Encodes a value into a deterministic, canonical byte representation using SCALE codec.
///
/// This function should be used for all governance envelopes and wire types that are
/// hashed, signed or persisted outside of the parameter store itself.
pub fn to_bytes_canonical<T: Encode>(v: &T) -> Result<Vec<u8>, String> {
    Ok(v.encode())
}

/// Decodes a value from a canonical byte representation using SCALE codec.
///
/// This function fails fast on any decoding error, including trailing bytes, returning
/// a descriptive string.
pub fn from_bytes_canonical<T: Decode>(b: &[u8]) -> Result<T, String> {
    T::decode_all(&mut &*b).map_err(|e| format!("canonical decode failed: {}", e))
}

/// Encodes a value as canonical JSON (RFC 8785).
///
/// This is the persistent encoding of every parameter value.
pub fn to_json_canonical<T: Serialize + ?Sized>(v: &T) -> Result<Vec<u8>, String> {
    serde_jcs::to_vec(v).map_err(|e| format!("canonical json encode failed: {}", e))
}

/// Decodes a value from JSON bytes. Input does not need to be in canonical form.
pub fn from_json_bytes<T: DeserializeOwned>(b: &[u8]) -> Result<T, String> {
    serde_json::from_slice(b).map_err(|e| format!("json decode failed: {}", e))
}

/// Parses raw bytes into an untyped JSON document.
pub fn json_value_from_bytes(b: &[u8]) -> Result<Value, String> {
    serde_json::from_slice(b).map_err(|e| format!("json decode failed: {}", e))
}

/// Merges `patch` onto `base`.
///
/// Objects are merged key by key and recursively; fields absent from the patch keep
/// their value in `base`. Any other patch (scalar, array, `null`) replaces the base
/// value wholesale.
pub fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (field, value) in patch_map {
                match base_map.get_mut(&field) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        base_map.insert(field, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}
