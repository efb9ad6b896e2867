// Path: crates/types/src/app/query.rs

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Requests the raw value of a single parameter.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct QueryParamsRequest {
    /// The subspace to read from. Must not be empty.
    pub subspace: String,
    /// The parameter key. Must not be empty.
    pub key: String,
}

impl QueryParamsRequest {
    /// Creates a new request.
    pub fn new(subspace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            subspace: subspace.into(),
            key: key.into(),
        }
    }
}

/// The raw value of a single parameter. `value` is empty when nothing was stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct QueryParamsResponse {
    /// The subspace that was read.
    pub subspace: String,
    /// The parameter key that was read.
    pub key: String,
    /// The stored canonical JSON, or an empty string.
    pub value: String,
}

/// Requests the list of subspaces and the keys stored in each.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct QuerySubspacesRequest {}

/// One subspace and the keys that currently hold a value in it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct SubspaceKeys {
    /// The subspace name.
    pub subspace: String,
    /// Stored keys, in the persistent store's byte order.
    pub keys: Vec<String>,
}

/// Every registered subspace with its stored keys.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Encode, Decode)]
pub struct QuerySubspacesResponse {
    /// One entry per registered subspace.
    pub subspaces: Vec<SubspaceKeys>,
}

impl QuerySubspacesResponse {
    /// Finds the entry for `name`, if present.
    pub fn find(&self, name: &str) -> Option<&SubspaceKeys> {
        self.subspaces.iter().find(|s| s.subspace == name)
    }
}
