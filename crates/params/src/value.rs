// Path: crates/params/src/value.rs

use ioi_types::params::{Coin, Dec, ParamKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::time::Duration;

/// A type that may be stored as a parameter.
///
/// Scalars, strings, byte strings, durations, decimals and coins are covered by the
/// implementations below. A module's structured parameter opts in with an empty
/// impl and is tagged as [`ParamKind::Message`]:
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Default, Clone, Debug)]
/// struct DepositParams { /* ... */ }
/// impl ParamValue for DepositParams {}
/// ```
pub trait ParamValue:
    Serialize + DeserializeOwned + Default + Clone + Debug + Send + Sync + 'static
{
    /// The type tag recorded in the key table.
    fn kind() -> ParamKind {
        ParamKind::Message(std::any::type_name::<Self>())
    }
}

/// Checks a decoded value before it is written. Returns a human-readable reason on
/// rejection.
///
/// Validators are plain function pointers, so a registration always carries one.
pub type Validator<T> = fn(&T) -> Result<(), String>;

/// A validator that accepts every value.
pub fn accept_any<T>(_: &T) -> Result<(), String> {
    Ok(())
}

macro_rules! impl_param_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                fn kind() -> ParamKind {
                    ParamKind::$kind
                }
            }
        )*
    };
}

impl_param_value! {
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i32 => I32,
    i64 => I64,
    String => String,
    Vec<u8> => Bytes,
    Vec<String> => StringList,
    Duration => Duration,
    Dec => Dec,
    Coin => Coin,
    Vec<Coin> => Coins,
}
