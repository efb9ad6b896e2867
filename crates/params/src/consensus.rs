// Path: crates/params/src/consensus.rs
//! Consensus parameters held by the `baseapp` subspace.
//!
//! There is exactly one key table for these parameters. Hosts either attach
//! [`consensus_params_key_table`] directly or register [`ConsensusParams`] as a
//! parameter set; both produce the same keys, kinds and validators.

use crate::key_table::KeyTable;
use crate::param_set::{ParamSet, ParamSetPair, ParamSetPairs};
use crate::value::ParamValue;
use ioi_types::error::RegistrationError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The subspace that holds consensus parameters.
pub const BASEAPP_SUBSPACE: &str = "baseapp";

/// Key of the block size and gas limits.
pub const KEY_BLOCK_PARAMS: &[u8] = b"BlockParams";
/// Key of the evidence age and size limits.
pub const KEY_EVIDENCE_PARAMS: &[u8] = b"EvidenceParams";
/// Key of the accepted validator public key types.
pub const KEY_VALIDATOR_PARAMS: &[u8] = b"ValidatorParams";

/// Limits on the size of a block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockParams {
    /// Maximum block size in bytes. Must be positive.
    pub max_bytes: i64,
    /// Maximum gas per block; `-1` means unlimited.
    pub max_gas: i64,
}

impl Default for BlockParams {
    fn default() -> Self {
        Self {
            max_bytes: 22_020_096, // 21 MiB
            max_gas: -1,
        }
    }
}

impl ParamValue for BlockParams {}

/// Limits on how old and how large submitted evidence may be.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EvidenceParams {
    /// Maximum age of evidence, in blocks.
    pub max_age_num_blocks: i64,
    /// Maximum age of evidence, in time.
    pub max_age_duration: Duration,
    /// Maximum total size of evidence per block, in bytes.
    pub max_bytes: i64,
}

impl Default for EvidenceParams {
    fn default() -> Self {
        Self {
            max_age_num_blocks: 100_000,
            max_age_duration: Duration::from_secs(48 * 60 * 60),
            max_bytes: 1_048_576,
        }
    }
}

impl ParamValue for EvidenceParams {}

/// The public key types validators may use.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidatorParams {
    /// Accepted key type names, e.g. `"ed25519"`.
    pub pub_key_types: Vec<String>,
}

impl Default for ValidatorParams {
    fn default() -> Self {
        Self {
            pub_key_types: vec!["ed25519".to_string()],
        }
    }
}

impl ParamValue for ValidatorParams {}

/// Checks that the block size is positive and gas is `-1` or more.
pub fn validate_block_params(params: &BlockParams) -> Result<(), String> {
    if params.max_bytes <= 0 {
        return Err(format!(
            "block maximum bytes must be positive: {}",
            params.max_bytes
        ));
    }
    if params.max_gas < -1 {
        return Err(format!(
            "block maximum gas must be greater than or equal to -1: {}",
            params.max_gas
        ));
    }
    Ok(())
}

/// Checks that both evidence ages are positive and the size is not negative.
pub fn validate_evidence_params(params: &EvidenceParams) -> Result<(), String> {
    if params.max_age_num_blocks <= 0 {
        return Err(format!(
            "evidence maximum age in blocks must be positive: {}",
            params.max_age_num_blocks
        ));
    }
    if params.max_age_duration.is_zero() {
        return Err("evidence maximum age time duration must be positive".to_string());
    }
    if params.max_bytes < 0 {
        return Err(format!(
            "maximum evidence bytes must be non-negative: {}",
            params.max_bytes
        ));
    }
    Ok(())
}

/// Checks that at least one public key type is accepted.
pub fn validate_validator_params(params: &ValidatorParams) -> Result<(), String> {
    if params.pub_key_types.is_empty() {
        return Err("validator allowed pubkey types must not be empty".to_string());
    }
    Ok(())
}

/// The key table of the `baseapp` subspace.
pub fn consensus_params_key_table() -> Result<KeyTable, RegistrationError> {
    KeyTable::from_param_set::<ConsensusParams>()
}

/// All consensus parameters, bound to the keys of the `baseapp` subspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsensusParams {
    /// Block limits.
    pub block: BlockParams,
    /// Evidence limits.
    pub evidence: EvidenceParams,
    /// Validator key types.
    pub validator: ValidatorParams,
}

impl ParamSet for ConsensusParams {
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
        vec![
            ParamSetPair::new(KEY_BLOCK_PARAMS, &mut self.block, validate_block_params),
            ParamSetPair::new(
                KEY_EVIDENCE_PARAMS,
                &mut self.evidence,
                validate_evidence_params,
            ),
            ParamSetPair::new(
                KEY_VALIDATOR_PARAMS,
                &mut self.validator,
                validate_validator_params,
            ),
        ]
    }
}
