// Path: crates/types/src/app/proposal.rs

use crate::config::ProposalLimits;
use crate::error::ProposalError;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The router key under which parameter change proposals are handled.
pub const PROPOSAL_ROUTE: &str = "params";

/// The type string of a parameter change proposal.
pub const PROPOSAL_TYPE_CHANGE: &str = "ParameterChange";

/// A single requested change: set `key` in `subspace` to the JSON document `value`.
///
/// `value` may be a partial object; fields it omits keep their current value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ParamChange {
    /// The name of the target subspace.
    pub subspace: String,
    /// The parameter key within the subspace.
    pub key: String,
    /// The raw JSON value.
    #[serde(with = "utf8_bytes")]
    pub value: Vec<u8>,
}

impl ParamChange {
    /// Creates a new parameter change.
    pub fn new(
        subspace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            subspace: subspace.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for ParamChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Param Change:")?;
        writeln!(f, "  Subspace: {}", self.subspace)?;
        writeln!(f, "  Key:      {}", self.key)?;
        write!(f, "  Value:    {}", String::from_utf8_lossy(&self.value))
    }
}

/// A governance decision carrying an ordered list of parameter changes that must
/// be applied atomically.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct ParameterChangeProposal {
    /// A short human-readable title.
    pub title: String,
    /// A human-readable description.
    pub description: String,
    /// The changes, applied in declared order.
    pub changes: Vec<ParamChange>,
}

impl ParameterChangeProposal {
    /// Creates a new proposal.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        changes: Vec<ParamChange>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            changes,
        }
    }

    /// The router key for this proposal.
    pub fn proposal_route(&self) -> &'static str {
        PROPOSAL_ROUTE
    }

    /// The type string of this proposal.
    pub fn proposal_type(&self) -> &'static str {
        PROPOSAL_TYPE_CHANGE
    }

    /// Performs stateless validation: title and description bounds, then the changes.
    pub fn validate_basic(&self, limits: &ProposalLimits) -> Result<(), ProposalError> {
        if self.title.trim().is_empty() {
            return Err(ProposalError::EmptyTitle);
        }
        if self.title.len() > limits.max_title_len {
            return Err(ProposalError::TitleTooLong {
                max: limits.max_title_len,
                got: self.title.len(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(ProposalError::EmptyDescription);
        }
        if self.description.len() > limits.max_description_len {
            return Err(ProposalError::DescriptionTooLong {
                max: limits.max_description_len,
                got: self.description.len(),
            });
        }
        validate_changes(&self.changes)
    }
}

impl fmt::Display for ParameterChangeProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parameter Change Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        write!(f, "  Changes:")?;
        for change in &self.changes {
            write!(
                f,
                "\n    Param Change:\n      Subspace: {}\n      Key:      {}\n      Value:    {}",
                change.subspace,
                change.key,
                String::from_utf8_lossy(&change.value)
            )?;
        }
        Ok(())
    }
}

/// Checks that `changes` is non-empty and that every subspace, key and value is
/// non-empty. Empty values are always rejected.
pub fn validate_changes(changes: &[ParamChange]) -> Result<(), ProposalError> {
    if changes.is_empty() {
        return Err(ProposalError::EmptyChanges);
    }
    for (index, change) in changes.iter().enumerate() {
        if change.subspace.is_empty() {
            return Err(ProposalError::EmptySubspace(index));
        }
        if change.key.is_empty() {
            return Err(ProposalError::EmptyKey(index));
        }
        if change.value.is_empty() {
            return Err(ProposalError::EmptyValue(index));
        }
    }
    Ok(())
}

mod utf8_bytes {
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let s = std::str::from_utf8(bytes).map_err(ser::Error::custom)?;
        serializer.serialize_str(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        String::deserialize(deserializer)
            .map(String::into_bytes)
            .map_err(de::Error::custom)
    }
}
