// Path: crates/types/src/params/dec.rs
//! A signed fixed-point decimal with 18 fractional digits.

use parity_scale_codec::{Decode, Encode};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The number of fractional digits carried by a [`Dec`].
pub const DEC_PRECISION: u32 = 18;

const PRECISION_MULTIPLIER: i128 = 10i128.pow(DEC_PRECISION);

/// Errors produced while constructing or parsing a [`Dec`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecError {
    /// The input string was empty.
    #[error("decimal string is empty")]
    Empty,
    /// The input string was not a plain decimal number.
    #[error("invalid decimal string '{0}'")]
    Invalid(String),
    /// The input carried more than 18 fractional digits.
    #[error("too much precision: maximum {DEC_PRECISION} fractional digits, got {0}")]
    TooPrecise(usize),
    /// The value does not fit in the internal representation.
    #[error("decimal overflow")]
    Overflow,
}

/// A signed fixed-point decimal amount, stored as an integer scaled by 10^18.
///
/// Encodes to JSON as a string with exactly 18 fractional digits
/// (`"0.130000000000000000"`), so the canonical form is unique per value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode)]
pub struct Dec(i128);

impl Dec {
    /// The value zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The value one.
    pub const fn one() -> Self {
        Self(PRECISION_MULTIPLIER)
    }

    /// Builds a decimal from its scaled integer representation.
    pub const fn from_raw(raw: i128) -> Self {
        Self(raw)
    }

    /// Returns the scaled integer representation.
    pub const fn raw(&self) -> i128 {
        self.0
    }

    /// Builds a decimal from a whole number.
    pub fn from_int(value: i64) -> Self {
        Self(i128::from(value) * PRECISION_MULTIPLIER)
    }

    /// Builds `value * 10^-prec`, e.g. `new_with_prec(13, 2)` is `0.13`.
    pub fn new_with_prec(value: i64, prec: u32) -> Result<Self, DecError> {
        if prec > DEC_PRECISION {
            return Err(DecError::TooPrecise(prec as usize));
        }
        let scale = 10i128.pow(DEC_PRECISION - prec);
        i128::from(value)
            .checked_mul(scale)
            .map(Self)
            .ok_or(DecError::Overflow)
    }

    /// Returns true if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns true if the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Adds two decimals, returning `None` on overflow.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtracts two decimals, returning `None` on overflow.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Multiplies two decimals, truncating toward zero. Returns `None` on overflow.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0
            .checked_mul(other.0)
            .map(|product| Self(product / PRECISION_MULTIPLIER))
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let multiplier = PRECISION_MULTIPLIER.unsigned_abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}.{:018}",
            sign,
            abs / multiplier,
            abs % multiplier
        )
    }
}

impl FromStr for Dec {
    type Err = DecError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        if s.is_empty() {
            return Err(DecError::Empty);
        }
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };

        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) {
            return Err(DecError::Invalid(input.to_string()));
        }

        let whole: i128 = int_part
            .parse()
            .map_err(|_| DecError::Overflow)?;
        let mut raw = whole
            .checked_mul(PRECISION_MULTIPLIER)
            .ok_or(DecError::Overflow)?;

        if let Some(frac) = frac_part {
            if !all_digits(frac) {
                return Err(DecError::Invalid(input.to_string()));
            }
            if frac.len() > DEC_PRECISION as usize {
                return Err(DecError::TooPrecise(frac.len()));
            }
            let digits: i128 = frac.parse().map_err(|_| DecError::Overflow)?;
            let scale = 10i128.pow(DEC_PRECISION - frac.len() as u32);
            raw = raw
                .checked_add(digits * scale)
                .ok_or(DecError::Overflow)?;
        }

        Ok(Self(if negative { -raw } else { raw }))
    }
}

impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Dec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DecVisitor;

        impl<'de> de::Visitor<'de> for DecVisitor {
            type Value = Dec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string such as \"0.13\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Dec, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DecVisitor)
    }
}
