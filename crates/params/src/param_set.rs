// Path: crates/params/src/param_set.rs

use crate::key_table::KeyTable;
use crate::value::{ParamValue, Validator};
use ioi_types::codec::{from_json_bytes, to_json_canonical};
use ioi_types::error::RegistrationError;
use ioi_types::params::ParamKind;
use std::any::TypeId;

/// Operations on a bound struct field, independent of its concrete type.
pub(crate) trait BoundField {
    fn value_type_id(&self) -> TypeId;
    fn kind(&self) -> ParamKind;
    fn validate(&self) -> Result<(), String>;
    fn encode(&self) -> Result<Vec<u8>, String>;
    fn decode_into(&mut self, raw: &[u8]) -> Result<(), String>;
    fn register(&self, table: &mut KeyTable, key: &[u8]) -> Result<(), RegistrationError>;
}

struct Field<'a, T: ParamValue> {
    value: &'a mut T,
    validator: Validator<T>,
}

impl<'a, T: ParamValue> BoundField for Field<'a, T> {
    fn value_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn kind(&self) -> ParamKind {
        T::kind()
    }

    fn validate(&self) -> Result<(), String> {
        (self.validator)(&*self.value)
    }

    fn encode(&self) -> Result<Vec<u8>, String> {
        to_json_canonical(&*self.value)
    }

    fn decode_into(&mut self, raw: &[u8]) -> Result<(), String> {
        *self.value = from_json_bytes(raw)?;
        Ok(())
    }

    fn register(&self, table: &mut KeyTable, key: &[u8]) -> Result<(), RegistrationError> {
        table.register_type::<T>(key, self.validator)
    }
}

/// One `(key, &mut field, validator)` triple of a [`ParamSet`].
pub struct ParamSetPair<'a> {
    pub(crate) key: &'a [u8],
    pub(crate) field: Box<dyn BoundField + 'a>,
}

impl<'a> ParamSetPair<'a> {
    /// Binds `field` to `key`, governed by `validator`.
    pub fn new<T: ParamValue>(key: &'a [u8], field: &'a mut T, validator: Validator<T>) -> Self {
        Self {
            key,
            field: Box::new(Field {
                value: field,
                validator,
            }),
        }
    }

    /// The parameter key.
    pub fn key(&self) -> &[u8] {
        self.key
    }

    /// The value kind of the bound field.
    pub fn kind(&self) -> ParamKind {
        self.field.kind()
    }

    /// Runs the pair's validator against the field's current value.
    pub fn validate(&self) -> Result<(), String> {
        self.field.validate()
    }
}

/// The ordered pairs of a parameter set.
pub type ParamSetPairs<'a> = Vec<ParamSetPair<'a>>;

/// A module's parameter struct, bound field by field to the keys of its subspace.
///
/// The order of the returned pairs is the declared order: it is the order in which
/// fields are validated and written by [`crate::Subspace::set_param_set`].
///
/// ```ignore
/// impl ParamSet for AuthParams {
///     fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
///         vec![
///             ParamSetPair::new(KEY_MAX_MEMO_CHARACTERS, &mut self.max_memo_characters, validate_positive),
///             ParamSetPair::new(KEY_TX_SIG_LIMIT, &mut self.tx_sig_limit, validate_positive),
///         ]
///     }
/// }
/// ```
pub trait ParamSet {
    /// Returns the `(key, field, validator)` triples in declared order.
    fn param_set_pairs(&mut self) -> ParamSetPairs<'_>;
}
