// Path: crates/types/src/params/coin.rs
//! A single token amount and helpers for validating coin lists.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of a single denomination.
///
/// The amount is carried as a decimal string in JSON so that values beyond 2^53
/// survive tooling that parses numbers as floating point.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, Serialize, Deserialize)]
pub struct Coin {
    /// The denomination, e.g. `"stake"`.
    pub denom: String,
    /// The amount in base units.
    #[serde(with = "amount_string")]
    pub amount: u128,
}

impl Coin {
    /// Creates a new coin.
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }

    /// Checks the denomination grammar `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
    pub fn validate(&self) -> Result<(), String> {
        validate_denom(&self.denom)
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

fn validate_denom(denom: &str) -> Result<(), String> {
    let bytes = denom.as_bytes();
    let valid_len = (3..=128).contains(&bytes.len());
    let valid_head = bytes.first().is_some_and(u8::is_ascii_alphabetic);
    let valid_tail = bytes
        .iter()
        .skip(1)
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-'));
    if valid_len && valid_head && valid_tail {
        Ok(())
    } else {
        Err(format!("invalid denom: {}", denom))
    }
}

/// Validates a coin list: every denom is well formed, every amount is positive and
/// denominations are sorted and unique.
pub fn validate_coins(coins: &[Coin]) -> Result<(), String> {
    for coin in coins {
        coin.validate()?;
        if coin.amount == 0 {
            return Err(format!("coin {} amount is not positive", coin.denom));
        }
    }
    for pair in coins.windows(2) {
        if let [prev, next] = pair {
            if prev.denom >= next.denom {
                return Err(format!(
                    "denominations not sorted or duplicated: {} then {}",
                    prev.denom, next.denom
                ));
            }
        }
    }
    Ok(())
}

mod amount_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
