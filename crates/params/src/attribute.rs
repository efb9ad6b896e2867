// Path: crates/params/src/attribute.rs
//! The type-erased record a key table keeps for every registered key.

use crate::value::{ParamValue, Validator};
use ioi_types::codec::{from_json_bytes, json_value_from_bytes, merge_json, to_json_canonical};
use ioi_types::error::ParamError;
use ioi_types::keys::display_key;
use ioi_types::params::ParamKind;
use std::any::TypeId;
use std::marker::PhantomData;

/// Operations on a registered key that depend on its concrete value type.
trait TypedOps: Send + Sync {
    /// Decodes `raw`, merged onto `current` (or the type's default), validates it and
    /// returns its canonical encoding.
    fn normalize(&self, key: &[u8], current: Option<&[u8]>, raw: &[u8]) -> Result<Vec<u8>, ParamError>;
}

struct Typed<T: ParamValue> {
    validator: Validator<T>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ParamValue> TypedOps for Typed<T> {
    fn normalize(&self, key: &[u8], current: Option<&[u8]>, raw: &[u8]) -> Result<Vec<u8>, ParamError> {
        let decode_err = |reason: String| ParamError::Decode {
            key: display_key(key),
            reason,
        };

        // Start from the stored value so that a partial object only overrides the
        // fields it carries.
        let base: T = match current {
            Some(bytes) => from_json_bytes(bytes).map_err(decode_err)?,
            None => T::default(),
        };
        let mut merged = serde_json::to_value(&base).map_err(|e| ParamError::Encode {
            key: display_key(key),
            reason: e.to_string(),
        })?;
        merge_json(&mut merged, json_value_from_bytes(raw).map_err(decode_err)?);
        let value: T = serde_json::from_value(merged).map_err(|e| decode_err(e.to_string()))?;

        (self.validator)(&value).map_err(|reason| ParamError::Validation {
            key: display_key(key),
            reason,
        })?;
        to_json_canonical(&value).map_err(|reason| ParamError::Encode {
            key: display_key(key),
            reason,
        })
    }
}

/// The prototype registered for a key: its value type and validator.
pub(crate) struct Attribute {
    kind: ParamKind,
    type_id: TypeId,
    ops: Box<dyn TypedOps>,
}

impl Attribute {
    pub(crate) fn new<T: ParamValue>(validator: Validator<T>) -> Self {
        Self {
            kind: T::kind(),
            type_id: TypeId::of::<T>(),
            ops: Box::new(Typed::<T> {
                validator,
                _marker: PhantomData,
            }),
        }
    }

    pub(crate) fn kind(&self) -> ParamKind {
        self.kind
    }

    /// Fails with `TypeMismatch` unless `T` is exactly the registered type.
    pub(crate) fn check_type<T: ParamValue>(&self, key: &[u8]) -> Result<(), ParamError> {
        self.check_type_id(key, TypeId::of::<T>(), T::kind())
    }

    pub(crate) fn check_type_id(
        &self,
        key: &[u8],
        type_id: TypeId,
        kind: ParamKind,
    ) -> Result<(), ParamError> {
        if self.type_id == type_id {
            Ok(())
        } else {
            Err(ParamError::TypeMismatch {
                key: display_key(key),
                expected: self.kind,
                got: kind,
            })
        }
    }

    pub(crate) fn normalize(
        &self,
        key: &[u8],
        current: Option<&[u8]>,
        raw: &[u8],
    ) -> Result<Vec<u8>, ParamError> {
        self.ops.normalize(key, current, raw)
    }
}
