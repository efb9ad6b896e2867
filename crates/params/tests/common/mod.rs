// Path: crates/params/tests/common/mod.rs
//! Module-style parameter sets and a keeper wired the way a host would wire it.
#![allow(dead_code)]

use ioi_params::{Keeper, KeyTable, ParamSet, ParamSetPair, ParamSetPairs, ParamValue, Subspace};
use ioi_types::params::{validate_coins, Coin};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const AUTH: &str = "auth";
pub const STAKING: &str = "staking";
pub const GOV: &str = "gov";

pub const KEY_MAX_MEMO_CHARACTERS: &[u8] = b"MaxMemoCharacters";
pub const KEY_TX_SIG_LIMIT: &[u8] = b"TxSigLimit";
pub const KEY_MAX_VALIDATORS: &[u8] = b"MaxValidators";
pub const KEY_BOND_DENOM: &[u8] = b"BondDenom";
pub const KEY_DEPOSIT_PARAMS: &[u8] = b"DepositParams";

pub fn validate_positive(v: &u64) -> Result<(), String> {
    if *v == 0 {
        return Err(format!("value must be positive: {}", v));
    }
    Ok(())
}

pub fn validate_denom(v: &String) -> Result<(), String> {
    if v.trim().is_empty() {
        return Err("denom cannot be blank".to_string());
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParams {
    pub max_memo_characters: u64,
    pub tx_sig_limit: u64,
}

impl Default for AuthParams {
    fn default() -> Self {
        Self {
            max_memo_characters: 256,
            tx_sig_limit: 7,
        }
    }
}

impl ParamSet for AuthParams {
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
        vec![
            ParamSetPair::new(
                KEY_MAX_MEMO_CHARACTERS,
                &mut self.max_memo_characters,
                validate_positive,
            ),
            ParamSetPair::new(KEY_TX_SIG_LIMIT, &mut self.tx_sig_limit, validate_positive),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StakingParams {
    pub max_validators: u64,
    pub bond_denom: String,
}

impl Default for StakingParams {
    fn default() -> Self {
        Self {
            max_validators: 100,
            bond_denom: "stake".to_string(),
        }
    }
}

impl ParamSet for StakingParams {
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
        vec![
            ParamSetPair::new(KEY_MAX_VALIDATORS, &mut self.max_validators, validate_positive),
            ParamSetPair::new(KEY_BOND_DENOM, &mut self.bond_denom, validate_denom),
        ]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DepositParams {
    pub min_deposit: Vec<Coin>,
    pub max_deposit_period: Duration,
}

impl ParamValue for DepositParams {}

pub fn validate_deposit_params(p: &DepositParams) -> Result<(), String> {
    validate_coins(&p.min_deposit)?;
    if p.max_deposit_period.is_zero() {
        return Err("maximum deposit period must be positive".to_string());
    }
    Ok(())
}

pub struct Spaces {
    pub auth: Subspace,
    pub staking: Subspace,
    pub gov: Subspace,
}

/// A keeper with `auth`, `staking` and `gov` subspaces, each with its table attached.
pub fn wired_keeper() -> (Keeper, Spaces) {
    let mut keeper = Keeper::new();
    let auth = keeper
        .subspace(AUTH)
        .unwrap()
        .with_key_table(KeyTable::from_param_set::<AuthParams>().unwrap())
        .unwrap();
    let staking = keeper
        .subspace(STAKING)
        .unwrap()
        .with_key_table(KeyTable::from_param_set::<StakingParams>().unwrap())
        .unwrap();
    let gov = keeper
        .subspace(GOV)
        .unwrap()
        .with_key_table(
            KeyTable::new()
                .with_type::<DepositParams>(KEY_DEPOSIT_PARAMS, validate_deposit_params)
                .unwrap(),
        )
        .unwrap();
    (keeper, Spaces { auth, staking, gov })
}

pub fn t0() -> Duration {
    Duration::from_secs(172_800)
}
