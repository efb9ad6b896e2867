// Path: crates/types/src/params/mod.rs
//! The closed set of value kinds a parameter may hold.
//!
//! Every key registered in a key table is tagged with a [`ParamKind`]. The tag is
//! what callers see when a write is rejected for carrying the wrong type, and it is
//! exposed by the query surface so that tooling can render stored values.

use std::fmt;

mod coin;
mod dec;

pub use coin::{validate_coins, Coin};
pub use dec::{Dec, DecError, DEC_PRECISION};

/// The type tag of a registered parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// A boolean flag.
    Bool,
    /// An unsigned 8-bit integer.
    U8,
    /// An unsigned 16-bit integer.
    U16,
    /// An unsigned 32-bit integer.
    U32,
    /// An unsigned 64-bit integer.
    U64,
    /// A signed 32-bit integer.
    I32,
    /// A signed 64-bit integer.
    I64,
    /// A UTF-8 string.
    String,
    /// An opaque byte string.
    Bytes,
    /// A list of strings.
    StringList,
    /// A time span.
    Duration,
    /// A fixed-point decimal amount.
    Dec,
    /// A single coin amount.
    Coin,
    /// A list of coin amounts.
    Coins,
    /// A structured message, identified by its Rust type name.
    Message(&'static str),
}

impl ParamKind {
    /// Returns true for structured message kinds.
    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::String => f.write_str("string"),
            Self::Bytes => f.write_str("bytes"),
            Self::StringList => f.write_str("string_list"),
            Self::Duration => f.write_str("duration"),
            Self::Dec => f.write_str("dec"),
            Self::Coin => f.write_str("coin"),
            Self::Coins => f.write_str("coins"),
            Self::Message(name) => write!(f, "message({})", name),
        }
    }
}
