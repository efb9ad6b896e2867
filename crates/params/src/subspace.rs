// Path: crates/params/src/subspace.rs
//! The per-module facade over the persistent and transient parameter stores.

use crate::attribute::Attribute;
use crate::key_table::KeyTable;
use crate::param_set::ParamSet;
use crate::value::ParamValue;
use ioi_api::context::ExecContext;
use ioi_api::state::{PrefixStore, ReadOnlyPrefixStore, StateAccess};
use ioi_types::codec::{from_json_bytes, to_json_canonical};
use ioi_types::error::{ParamError, RegistrationError};
use ioi_types::keys::{display_key, subspace_prefix, MODIFIED_MARKER};
use ioi_types::prelude::OptionExt;
use ioi_types::MAX_PARAM_VALUE_BYTES;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;

/// A module's namespace in the parameter store.
///
/// Every key is stored under `name + "/"` in both the persistent and the transient
/// store. Clones share the key table slot, so a table attached through any clone is
/// visible to all of them, including the copy held by the [`crate::Keeper`].
#[derive(Clone)]
pub struct Subspace {
    name: String,
    prefix: Vec<u8>,
    table: Arc<OnceCell<KeyTable>>,
}

impl Subspace {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            prefix: subspace_prefix(name),
            table: Arc::new(OnceCell::new()),
        }
    }

    /// The subspace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true once a key table has been attached.
    pub fn has_key_table(&self) -> bool {
        self.table.get().is_some()
    }

    /// The attached key table, if any.
    pub fn key_table(&self) -> Option<&KeyTable> {
        self.table.get()
    }

    /// Attaches `table`. A subspace accepts exactly one table; a second call fails
    /// and leaves the first table in place.
    pub fn with_key_table(&self, table: KeyTable) -> Result<Subspace, RegistrationError> {
        self.table
            .set(table)
            .map_err(|_| RegistrationError::KeyTableAlreadySet(self.name.clone()))?;
        Ok(self.clone())
    }

    fn store<'c>(&self, ctx: &'c ExecContext<'_>) -> ReadOnlyPrefixStore<'c> {
        ReadOnlyPrefixStore::new(&*ctx.state, self.prefix.clone())
    }

    fn transient<'c>(&self, ctx: &'c ExecContext<'_>) -> ReadOnlyPrefixStore<'c> {
        ReadOnlyPrefixStore::new(&*ctx.transient, self.prefix.clone())
    }

    fn attribute(&self, key: &[u8]) -> Result<&Attribute, ParamError> {
        let table = self
            .table
            .get()
            .required_with(|| ParamError::MissingKeyTable(self.name.clone()))?;
        table
            .attribute(key)
            .required_with(|| ParamError::UnregisteredKey {
                subspace: self.name.clone(),
                key: display_key(key),
            })
    }

    fn check_type<T: ParamValue>(&self, key: &[u8]) -> Result<(), ParamError> {
        self.attribute(key)?.check_type::<T>(key)
    }

    fn not_found(&self, key: &[u8]) -> ParamError {
        ParamError::NotFound {
            subspace: self.name.clone(),
            key: display_key(key),
        }
    }

    /// Writes already-encoded bytes and marks the key as modified. The value and its
    /// marker land together or not at all.
    fn write(&self, ctx: &mut ExecContext<'_>, key: &[u8], bytes: &[u8]) -> Result<(), ParamError> {
        ctx.atomic(|scoped| -> Result<(), ParamError> {
            PrefixStore::new(&mut *scoped.state, self.prefix.clone()).insert(key, bytes)?;
            PrefixStore::new(&mut *scoped.transient, self.prefix.clone())
                .insert(key, MODIFIED_MARKER)?;
            Ok(())
        })
    }

    /// Returns true if a value is stored under `key`.
    pub fn has(&self, ctx: &ExecContext<'_>, key: &[u8]) -> Result<bool, ParamError> {
        Ok(self.store(ctx).has(key)?)
    }

    /// Reads and decodes the value of `key`.
    ///
    /// Fails if the key is unregistered, if `T` is not the registered type, or if no
    /// value is stored.
    pub fn get<T: ParamValue>(&self, ctx: &ExecContext<'_>, key: &[u8]) -> Result<T, ParamError> {
        self.check_type::<T>(key)?;
        let raw = self
            .store(ctx)
            .get(key)?
            .required_with(|| self.not_found(key))?;
        from_json_bytes(&raw).map_err(|reason| ParamError::Decode {
            key: display_key(key),
            reason,
        })
    }

    /// Like [`Subspace::get`], writing into `dst`.
    pub fn get_into<T: ParamValue>(
        &self,
        ctx: &ExecContext<'_>,
        key: &[u8],
        dst: &mut T,
    ) -> Result<(), ParamError> {
        *dst = self.get(ctx, key)?;
        Ok(())
    }

    /// Fills `dst` if a value is stored and leaves it untouched otherwise. Returns
    /// whether `dst` was filled.
    pub fn get_if_exists<T: ParamValue>(
        &self,
        ctx: &ExecContext<'_>,
        key: &[u8],
        dst: &mut T,
    ) -> Result<bool, ParamError> {
        self.check_type::<T>(key)?;
        match self.store(ctx).get(key)? {
            Some(raw) => {
                *dst = from_json_bytes(&raw).map_err(|reason| ParamError::Decode {
                    key: display_key(key),
                    reason,
                })?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The stored bytes of `key`, or an empty vector when nothing is stored. The key
    /// does not need to be registered.
    pub fn get_raw(&self, ctx: &ExecContext<'_>, key: &[u8]) -> Result<Vec<u8>, ParamError> {
        Ok(self.store(ctx).get(key)?.unwrap_or_default())
    }

    /// Encodes and writes `value`, marking `key` as modified for the current block.
    ///
    /// The validator is not consulted; callers writing untrusted values go through
    /// [`Subspace::update`] or [`Subspace::set_param_set`].
    pub fn set<T: ParamValue>(
        &self,
        ctx: &mut ExecContext<'_>,
        key: &[u8],
        value: &T,
    ) -> Result<(), ParamError> {
        self.check_type::<T>(key)?;
        let bytes = to_json_canonical(value).map_err(|reason| ParamError::Encode {
            key: display_key(key),
            reason,
        })?;
        self.write(ctx, key, &bytes)
    }

    /// Applies a governance update: `raw` is JSON for the registered type and may be a
    /// partial object, in which case the fields it omits keep their stored value (or
    /// the type's default when nothing is stored).
    ///
    /// The merged value must pass the key's validator. Returns the canonical bytes
    /// written.
    pub fn update(
        &self,
        ctx: &mut ExecContext<'_>,
        key: &[u8],
        raw: &[u8],
    ) -> Result<Vec<u8>, ParamError> {
        let attribute = self.attribute(key)?;
        if raw.len() > MAX_PARAM_VALUE_BYTES {
            return Err(ParamError::Decode {
                key: display_key(key),
                reason: format!(
                    "value of {} bytes exceeds the {} byte limit",
                    raw.len(),
                    MAX_PARAM_VALUE_BYTES
                ),
            });
        }
        let current = self.store(ctx).get(key)?;
        let bytes = attribute.normalize(key, current.as_deref(), raw)?;
        self.write(ctx, key, &bytes)?;
        Ok(bytes)
    }

    /// Returns true if `key` was written since the transient store was last cleared.
    pub fn modified(&self, ctx: &ExecContext<'_>, key: &[u8]) -> Result<bool, ParamError> {
        Ok(self.transient(ctx).has(key)?)
    }

    /// Fills every field of `ps` from the store. Fails on the first field that has
    /// no stored value.
    pub fn get_param_set<P: ParamSet + ?Sized>(
        &self,
        ctx: &ExecContext<'_>,
        ps: &mut P,
    ) -> Result<(), ParamError> {
        self.read_param_set(ctx, ps, true).map(|_| ())
    }

    /// Fills the fields of `ps` that have a stored value and leaves the others
    /// untouched. Returns the number of fields filled.
    pub fn get_param_set_if_exists<P: ParamSet + ?Sized>(
        &self,
        ctx: &ExecContext<'_>,
        ps: &mut P,
    ) -> Result<usize, ParamError> {
        self.read_param_set(ctx, ps, false)
    }

    fn read_param_set<P: ParamSet + ?Sized>(
        &self,
        ctx: &ExecContext<'_>,
        ps: &mut P,
        required: bool,
    ) -> Result<usize, ParamError> {
        let store = self.store(ctx);
        let mut filled = 0;
        for mut pair in ps.param_set_pairs() {
            self.attribute(pair.key)?
                .check_type_id(pair.key, pair.field.value_type_id(), pair.field.kind())?;
            match store.get(pair.key)? {
                Some(raw) => {
                    pair.field
                        .decode_into(&raw)
                        .map_err(|reason| ParamError::Decode {
                            key: display_key(pair.key),
                            reason,
                        })?;
                    filled += 1;
                }
                None if required => return Err(self.not_found(pair.key)),
                None => {}
            }
        }
        Ok(filled)
    }

    /// Validates every field of `ps` in declared order, then writes them all.
    ///
    /// Nothing is written unless every field is registered with a matching type and
    /// passes its validator.
    pub fn set_param_set<P: ParamSet + ?Sized>(
        &self,
        ctx: &mut ExecContext<'_>,
        ps: &mut P,
    ) -> Result<(), ParamError> {
        let mut encoded = Vec::new();
        for pair in ps.param_set_pairs() {
            self.attribute(pair.key)?
                .check_type_id(pair.key, pair.field.value_type_id(), pair.field.kind())?;
            pair.field
                .validate()
                .map_err(|reason| ParamError::Validation {
                    key: display_key(pair.key),
                    reason,
                })?;
            let bytes = pair.field.encode().map_err(|reason| ParamError::Encode {
                key: display_key(pair.key),
                reason,
            })?;
            encoded.push((pair.key.to_vec(), bytes));
        }

        ctx.atomic(|scoped| {
            for (key, bytes) in &encoded {
                self.write(scoped, key, bytes)?;
            }
            Ok(())
        })
    }

    /// The keys that currently hold a value, in the persistent store's byte order.
    pub fn keys(&self, ctx: &ExecContext<'_>) -> Result<Vec<String>, ParamError> {
        let store = self.store(ctx);
        let mut keys = Vec::new();
        for item in store.prefix_scan(&[])? {
            let (key, _) = item?;
            keys.push(display_key(&key));
        }
        Ok(keys)
    }
}

impl fmt::Debug for Subspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subspace")
            .field("name", &self.name)
            .field("key_table", &self.table.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param_set::{ParamSetPair, ParamSetPairs};
    use crate::value::accept_any;
    use ioi_api::state::MemoryStore;
    use ioi_test_utils::fixtures::{FailingStore, TestStores};
    use ioi_test_utils::{assert_err, assert_ok};
    use ioi_types::error::StateError;
    use ioi_types::params::ParamKind;

    const KEY_MAX: &[u8] = b"MaxValidators";
    const KEY_DENOM: &[u8] = b"BondDenom";

    fn non_zero(v: &u64) -> Result<(), String> {
        if *v == 0 {
            return Err("must be positive".into());
        }
        Ok(())
    }

    fn non_empty(v: &String) -> Result<(), String> {
        if v.is_empty() {
            return Err("must not be empty".into());
        }
        Ok(())
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct StakingParams {
        max_validators: u64,
        bond_denom: String,
    }

    impl ParamSet for StakingParams {
        fn param_set_pairs(&mut self) -> ParamSetPairs<'_> {
            vec![
                ParamSetPair::new(KEY_MAX, &mut self.max_validators, non_zero),
                ParamSetPair::new(KEY_DENOM, &mut self.bond_denom, non_empty),
            ]
        }
    }

    fn staking() -> Subspace {
        Subspace::new("staking")
            .with_key_table(KeyTable::from_param_set::<StakingParams>().unwrap())
            .unwrap()
    }

    #[test]
    fn test_with_key_table_once() {
        let space = Subspace::new("auth");
        assert!(!space.has_key_table());
        let clone = space.clone();
        let attached = assert_ok!(space.with_key_table(
            KeyTable::new().with_type::<u64>(b"TxSigLimit", accept_any).unwrap()
        ));
        assert!(attached.has_key_table());
        // The slot is shared between clones.
        assert!(clone.has_key_table());

        let err = assert_err!(space.with_key_table(KeyTable::new()));
        assert_eq!(err, RegistrationError::KeyTableAlreadySet("auth".into()));
        assert_eq!(
            space.key_table().and_then(|t| t.get(b"TxSigLimit")),
            Some(ParamKind::U64)
        );
    }

    #[test]
    fn test_set_is_all_or_nothing_when_transient_write_fails() {
        let space = staking();
        let mut state = MemoryStore::new();
        let mut transient = FailingStore::default();
        let mut ctx = ExecContext::new(&mut state, &mut transient, 1);

        let err = assert_err!(space.set(&mut ctx, KEY_MAX, &5u64));
        assert!(matches!(err, ParamError::State(StateError::Backend(_))));
        let err = assert_err!(space.update(&mut ctx, KEY_MAX, b"5"));
        assert!(matches!(err, ParamError::State(StateError::Backend(_))));
        drop(ctx);
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_get_roundtrip_and_modified() {
        let space = staking();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();

        assert!(!space.has(&ctx, KEY_MAX).unwrap());
        assert!(!space.modified(&ctx, KEY_MAX).unwrap());
        assert_ok!(space.set(&mut ctx, KEY_MAX, &100u64));
        assert_eq!(space.get::<u64>(&ctx, KEY_MAX).unwrap(), 100);
        assert!(space.has(&ctx, KEY_MAX).unwrap());
        assert!(space.modified(&ctx, KEY_MAX).unwrap());
        assert!(!space.modified(&ctx, KEY_DENOM).unwrap());
        assert_eq!(space.get_raw(&ctx, KEY_MAX).unwrap(), b"100".to_vec());
        drop(ctx);

        assert_eq!(stores.raw(b"staking/MaxValidators"), Some(b"100".to_vec()));
        assert_eq!(stores.transient.get(b"staking/MaxValidators").unwrap(), Some(vec![]));
    }

    #[test]
    fn test_programmer_errors() {
        let space = staking();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();

        let err = assert_err!(space.set(&mut ctx, b"Unknown", &1u64));
        assert!(matches!(err, ParamError::UnregisteredKey { .. }));
        assert!(err.is_programmer_error());

        let err = assert_err!(space.set(&mut ctx, KEY_MAX, &1u32));
        assert_eq!(
            err,
            ParamError::TypeMismatch {
                key: "MaxValidators".into(),
                expected: ParamKind::U64,
                got: ParamKind::U32,
            }
        );
        assert!(assert_err!(space.get::<String>(&ctx, KEY_MAX)).is_programmer_error());

        let bare = Subspace::new("bare");
        assert_eq!(
            assert_err!(bare.get::<u64>(&ctx, KEY_MAX)),
            ParamError::MissingKeyTable("bare".into())
        );
        drop(ctx);
        assert!(stores.state.is_empty());
    }

    #[test]
    fn test_get_missing_and_get_if_exists() {
        let space = staking();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();

        assert!(matches!(
            space.get::<u64>(&ctx, KEY_MAX),
            Err(ParamError::NotFound { .. })
        ));
        let mut dst = 42u64;
        assert!(!space.get_if_exists(&ctx, KEY_MAX, &mut dst).unwrap());
        assert_eq!(dst, 42);

        space.set(&mut ctx, KEY_MAX, &7u64).unwrap();
        assert!(space.get_if_exists(&ctx, KEY_MAX, &mut dst).unwrap());
        assert_eq!(dst, 7);

        let mut wrong = String::new();
        assert!(matches!(
            space.get_if_exists(&ctx, KEY_MAX, &mut wrong),
            Err(ParamError::TypeMismatch { .. })
        ));

        let mut into = 0u64;
        space.get_into(&ctx, KEY_MAX, &mut into).unwrap();
        assert_eq!(into, 7);
        assert!(space.get_raw(&ctx, b"Unregistered").unwrap().is_empty());
    }

    #[test]
    fn test_update_validates_and_normalizes() {
        let space = staking();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();

        let written = space.update(&mut ctx, KEY_MAX, b" 100 ").unwrap();
        assert_eq!(written, b"100".to_vec());
        assert_eq!(space.get::<u64>(&ctx, KEY_MAX).unwrap(), 100);

        assert!(matches!(
            space.update(&mut ctx, KEY_MAX, b"0"),
            Err(ParamError::Validation { .. })
        ));
        assert!(matches!(
            space.update(&mut ctx, KEY_MAX, b"\"ten\""),
            Err(ParamError::Decode { .. })
        ));
        assert!(matches!(
            space.update(&mut ctx, b"Nope", b"1"),
            Err(ParamError::UnregisteredKey { .. })
        ));
        let oversized = vec![b' '; MAX_PARAM_VALUE_BYTES + 1];
        assert!(matches!(
            space.update(&mut ctx, KEY_MAX, &oversized),
            Err(ParamError::Decode { .. })
        ));
        assert_eq!(space.get::<u64>(&ctx, KEY_MAX).unwrap(), 100);
    }

    #[test]
    fn test_param_set_roundtrip() {
        let space = staking();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();

        let mut params = StakingParams {
            max_validators: 100,
            bond_denom: "stake".into(),
        };
        space.set_param_set(&mut ctx, &mut params).unwrap();

        let mut read = StakingParams::default();
        space.get_param_set(&ctx, &mut read).unwrap();
        assert_eq!(read, params);
        assert_eq!(
            space.keys(&ctx).unwrap(),
            vec!["BondDenom".to_string(), "MaxValidators".to_string()]
        );
    }

    #[test]
    fn test_set_param_set_writes_nothing_on_invalid_field() {
        let space = staking();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();

        let mut params = StakingParams {
            max_validators: 100,
            bond_denom: String::new(),
        };
        let err = assert_err!(space.set_param_set(&mut ctx, &mut params));
        assert!(matches!(err, ParamError::Validation { ref key, .. } if key == "BondDenom"));
        assert!(!space.has(&ctx, KEY_MAX).unwrap());
        assert!(!space.modified(&ctx, KEY_MAX).unwrap());
    }

    #[test]
    fn test_get_param_set_if_exists_fills_present_fields() {
        let space = staking();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();
        space.set(&mut ctx, KEY_DENOM, &"stake".to_string()).unwrap();

        let mut params = StakingParams {
            max_validators: 9,
            bond_denom: String::new(),
        };
        assert!(matches!(
            space.get_param_set(&ctx, &mut params.clone()),
            Err(ParamError::NotFound { .. })
        ));
        assert_eq!(space.get_param_set_if_exists(&ctx, &mut params).unwrap(), 1);
        assert_eq!(params.max_validators, 9);
        assert_eq!(params.bond_denom, "stake");
    }

    #[test]
    fn test_subspaces_are_isolated() {
        let a = Subspace::new("a")
            .with_key_table(KeyTable::new().with_type::<u64>(b"k", accept_any).unwrap())
            .unwrap();
        let ab = Subspace::new("ab")
            .with_key_table(KeyTable::new().with_type::<u64>(b"k", accept_any).unwrap())
            .unwrap();
        let mut stores = TestStores::new();
        let mut ctx = stores.ctx();
        a.set(&mut ctx, b"k", &1u64).unwrap();
        ab.set(&mut ctx, b"k", &2u64).unwrap();

        assert_eq!(a.get::<u64>(&ctx, b"k").unwrap(), 1);
        assert_eq!(ab.get::<u64>(&ctx, b"k").unwrap(), 2);
        assert_eq!(a.keys(&ctx).unwrap(), vec!["k".to_string()]);
    }
}
