// Path: crates/types/src/config/mod.rs

//! Configuration structures for the parameter keeper (`params.toml`).

use crate::error::ConfigError;
use crate::keys::{PARAMS_STORE_KEY, PARAMS_TRANSIENT_STORE_KEY};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Platform bounds applied to parameter change proposals before they are applied.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ProposalLimits {
    /// The maximum length of a proposal title, in bytes.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
    /// The maximum length of a proposal description, in bytes.
    #[serde(default = "default_max_description_len")]
    pub max_description_len: usize,
}

fn default_max_title_len() -> usize {
    140
}
fn default_max_description_len() -> usize {
    10_000
}

impl Default for ProposalLimits {
    fn default() -> Self {
        Self {
            max_title_len: default_max_title_len(),
            max_description_len: default_max_description_len(),
        }
    }
}

/// Configuration for the parameter keeper.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ParamsConfig {
    /// The name of the persistent store that holds parameter values. The host mounts
    /// the store of this name as `ExecContext::state`.
    #[serde(default = "default_store_key")]
    pub store_key: String,
    /// The name of the transient store that records per-block modifications. The host
    /// mounts the store of this name as `ExecContext::transient` and clears it at
    /// every block boundary.
    #[serde(default = "default_transient_store_key")]
    pub transient_store_key: String,
    /// Bounds applied to parameter change proposals.
    #[serde(default)]
    pub proposal_limits: ProposalLimits,
}

fn default_store_key() -> String {
    PARAMS_STORE_KEY.to_string()
}
fn default_transient_store_key() -> String {
    PARAMS_TRANSIENT_STORE_KEY.to_string()
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self {
            store_key: default_store_key(),
            transient_store_key: default_transient_store_key(),
            proposal_limits: ProposalLimits::default(),
        }
    }
}

impl ParamsConfig {
    /// Parses a configuration document and validates it.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Validates the configuration for semantic correctness.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_key.is_empty() || self.transient_store_key.is_empty() {
            return Err(ConfigError::Invalid(
                "'store_key' and 'transient_store_key' must not be empty.".to_string(),
            ));
        }
        if self.store_key == self.transient_store_key {
            return Err(ConfigError::Invalid(
                "'store_key' and 'transient_store_key' must differ.".to_string(),
            ));
        }
        if self.proposal_limits.max_title_len == 0 || self.proposal_limits.max_description_len == 0
        {
            return Err(ConfigError::Invalid(
                "proposal limits must be greater than 0.".to_string(),
            ));
        }
        Ok(())
    }
}
