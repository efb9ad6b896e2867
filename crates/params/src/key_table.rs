// Path: crates/params/src/key_table.rs

use crate::attribute::Attribute;
use crate::param_set::ParamSet;
use crate::value::{ParamValue, Validator};
use ioi_types::error::RegistrationError;
use ioi_types::keys::{display_key, is_valid_param_key};
use ioi_types::params::ParamKind;
use std::collections::BTreeMap;
use std::fmt;

/// Declares every key a subspace may hold, with its value type and validator.
///
/// Once attached to a subspace the table is frozen: it is only reachable through a
/// shared reference from then on.
#[derive(Default)]
pub struct KeyTable {
    attributes: BTreeMap<Vec<u8>, Attribute>,
}

impl KeyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `key` with value type `T`.
    ///
    /// The key must be non-empty, ASCII alphanumeric and not yet registered.
    pub fn register_type<T: ParamValue>(
        &mut self,
        key: &[u8],
        validator: Validator<T>,
    ) -> Result<(), RegistrationError> {
        if key.is_empty() {
            return Err(RegistrationError::EmptyKey);
        }
        if !is_valid_param_key(key) {
            return Err(RegistrationError::InvalidKey(display_key(key)));
        }
        if self.attributes.contains_key(key) {
            return Err(RegistrationError::DuplicateKey(display_key(key)));
        }
        self.attributes
            .insert(key.to_vec(), Attribute::new::<T>(validator));
        Ok(())
    }

    /// Builder form of [`KeyTable::register_type`].
    pub fn with_type<T: ParamValue>(
        mut self,
        key: &[u8],
        validator: Validator<T>,
    ) -> Result<Self, RegistrationError> {
        self.register_type::<T>(key, validator)?;
        Ok(self)
    }

    /// Registers every pair of `ps`. Stops at the first failure; pairs registered
    /// before it remain.
    pub fn register_param_set<P: ParamSet + ?Sized>(
        &mut self,
        ps: &mut P,
    ) -> Result<(), RegistrationError> {
        for pair in ps.param_set_pairs() {
            pair.field.register(self, pair.key)?;
        }
        Ok(())
    }

    /// Builds a table from the pairs of `P::default()`.
    pub fn from_param_set<P: ParamSet + Default>() -> Result<Self, RegistrationError> {
        let mut table = Self::new();
        table.register_param_set(&mut P::default())?;
        Ok(table)
    }

    pub(crate) fn attribute(&self, key: &[u8]) -> Option<&Attribute> {
        self.attributes.get(key)
    }

    /// The kind registered for `key`, if any.
    pub fn get(&self, key: &[u8]) -> Option<ParamKind> {
        self.attributes.get(key).map(Attribute::kind)
    }

    /// Returns true if `key` is registered.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.attributes.contains_key(key)
    }

    /// Registered keys in byte order.
    pub fn keys(&self) -> impl Iterator<Item = &[u8]> {
        self.attributes.keys().map(Vec::as_slice)
    }

    /// The number of registered keys.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Debug for KeyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.attributes
                    .iter()
                    .map(|(k, a)| (display_key(k), a.kind().to_string())),
            )
            .finish()
    }
}
