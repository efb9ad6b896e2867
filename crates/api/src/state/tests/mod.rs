// Path: crates/api/src/state/tests/mod.rs
#[cfg(test)]
mod basic_state_tests {
    use crate::error::StateError;
    use crate::state::{MemoryStore, StateAccess, StateScanIter};
    use std::collections::HashMap;
    use std::sync::Arc;

    // A store that keeps no ordering of its own, to check the trait's provided methods.
    #[derive(Debug, Default)]
    struct HashStore {
        data: HashMap<Vec<u8>, Vec<u8>>,
    }

    impl StateAccess for HashStore {
        fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
            Ok(self.data.get(key).cloned())
        }
        fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
            self.data.insert(key.to_vec(), value.to_vec());
            Ok(())
        }
        fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
            self.data.remove(key);
            Ok(())
        }
        fn batch_set(&mut self, updates: &[(Vec<u8>, Vec<u8>)]) -> Result<(), StateError> {
            for (key, value) in updates {
                self.insert(key, value)?;
            }
            Ok(())
        }
        fn batch_get(&self, keys: &[Vec<u8>]) -> Result<Vec<Option<Vec<u8>>>, StateError> {
            keys.iter().map(|k| self.get(k)).collect()
        }
        fn batch_apply(
            &mut self,
            inserts: &[(Vec<u8>, Vec<u8>)],
            deletes: &[Vec<u8>],
        ) -> Result<(), StateError> {
            for key in deletes {
                self.delete(key)?;
            }
            self.batch_set(inserts)
        }
        fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
            let mut results: Vec<_> = self
                .data
                .iter()
                .filter(|(k, _)| k.starts_with(prefix))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            results.sort();
            Ok(Box::new(results.into_iter().map(|(k, v)| {
                Ok((Arc::from(k.as_slice()), Arc::from(v.as_slice())))
            })))
        }
    }

    fn scan_keys(state: &dyn StateAccess, prefix: &[u8]) -> Vec<Vec<u8>> {
        state
            .prefix_scan(prefix)
            .unwrap()
            .map(|item| item.unwrap().0.to_vec())
            .collect()
    }

    #[test]
    fn test_basic_state_operations() {
        let mut state = MemoryStore::new();
        let key = b"test_key";
        let value = b"test_value";
        state.insert(key, value).unwrap();
        assert_eq!(state.get(key).unwrap(), Some(value.to_vec()));
        assert!(state.has(key).unwrap());
        state.delete(key).unwrap();
        assert_eq!(state.get(key).unwrap(), None);
        assert!(!state.has(key).unwrap());
    }

    #[test]
    fn test_provided_has_and_boxed_dispatch() {
        let mut state: Box<dyn StateAccess> = Box::new(HashStore::default());
        state.insert(b"k", b"v").unwrap();
        assert!(state.has(b"k").unwrap());
        assert!(!state.has(b"missing").unwrap());
    }

    #[test]
    fn test_batch_operations() {
        let mut state = MemoryStore::new();
        let updates = vec![
            (b"key1".to_vec(), b"value1".to_vec()),
            (b"key2".to_vec(), b"value2".to_vec()),
        ];
        state.batch_set(&updates).unwrap();
        let keys = vec![
            b"key1".to_vec(),
            b"key2".to_vec(),
            b"nonexistent".to_vec(),
        ];
        let values = state.batch_get(&keys).unwrap();
        assert_eq!(
            values,
            vec![Some(b"value1".to_vec()), Some(b"value2".to_vec()), None]
        );

        state
            .batch_apply(&[(b"key3".to_vec(), b"value3".to_vec())], &[b"key1".to_vec()])
            .unwrap();
        assert_eq!(state.get(b"key1").unwrap(), None);
        assert_eq!(state.get(b"key3").unwrap(), Some(b"value3".to_vec()));
    }

    #[test]
    fn test_prefix_scan_is_ordered_and_bounded() {
        let mut state = MemoryStore::new();
        state.insert(b"b/k3", b"3").unwrap();
        state.insert(b"a/k2", b"2").unwrap();
        state.insert(b"a/k1", b"1").unwrap();
        state.insert(b"ab", b"x").unwrap();

        assert_eq!(
            scan_keys(&state, b"a/"),
            vec![b"a/k1".to_vec(), b"a/k2".to_vec()]
        );
        assert_eq!(scan_keys(&state, b"b/"), vec![b"b/k3".to_vec()]);
        assert!(scan_keys(&state, b"c/").is_empty());
        assert_eq!(scan_keys(&state, b"").len(), 4);
    }

    #[test]
    fn test_clear() {
        let mut state = MemoryStore::new();
        state.insert(b"k", b"v").unwrap();
        assert_eq!(state.len(), 1);
        state.clear();
        assert!(state.is_empty());
    }
}

#[cfg(test)]
mod prefix_store_tests {
    use crate::error::StateError;
    use crate::state::{MemoryStore, PrefixStore, ReadOnlyPrefixStore, StateAccess};

    #[test]
    fn test_writes_are_confined_to_prefix() {
        let mut backing = MemoryStore::new();
        {
            let mut view = PrefixStore::new(&mut backing, b"staking/".to_vec());
            view.insert(b"MaxValidators", b"100").unwrap();
            assert_eq!(view.get(b"MaxValidators").unwrap(), Some(b"100".to_vec()));
        }
        assert_eq!(
            backing.get(b"staking/MaxValidators").unwrap(),
            Some(b"100".to_vec())
        );
        assert_eq!(backing.get(b"MaxValidators").unwrap(), None);
    }

    #[test]
    fn test_views_do_not_overlap() {
        let mut backing = MemoryStore::new();
        backing.insert(b"a/k1", b"1").unwrap();
        backing.insert(b"ab/k1", b"2").unwrap();

        let view = ReadOnlyPrefixStore::new(&backing, b"a/".to_vec());
        assert_eq!(view.get(b"k1").unwrap(), Some(b"1".to_vec()));
        let keys: Vec<Vec<u8>> = view
            .prefix_scan(b"")
            .unwrap()
            .map(|r| r.unwrap().0.to_vec())
            .collect();
        assert_eq!(keys, vec![b"k1".to_vec()]);
    }

    #[test]
    fn test_scan_strips_prefix() {
        let mut backing = MemoryStore::new();
        backing.insert(b"gov/DepositParams", b"{}").unwrap();
        backing.insert(b"gov/VotingParams", b"{}").unwrap();

        let mut view = PrefixStore::new(&mut backing, b"gov/".to_vec());
        view.batch_apply(&[(b"TallyParams".to_vec(), b"{}".to_vec())], &[b"VotingParams".to_vec()])
            .unwrap();
        let keys: Vec<Vec<u8>> = view
            .prefix_scan(b"")
            .unwrap()
            .map(|r| r.unwrap().0.to_vec())
            .collect();
        assert_eq!(keys, vec![b"DepositParams".to_vec(), b"TallyParams".to_vec()]);
    }

    #[test]
    fn test_read_only_view_rejects_writes() {
        let backing = MemoryStore::new();
        let mut view = ReadOnlyPrefixStore::new(&backing, b"auth/".to_vec());
        assert!(matches!(
            view.insert(b"TxSigLimit", b"7"),
            Err(StateError::PermissionDenied(_))
        ));
        assert!(matches!(
            view.delete(b"TxSigLimit"),
            Err(StateError::PermissionDenied(_))
        ));
        assert!(view.batch_set(&[]).is_ok());
    }
}

#[cfg(test)]
mod overlay_tests {
    use crate::state::{MemoryStore, StateAccess, StateOverlay};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn base() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.insert(b"p/a", b"1").unwrap();
        store.insert(b"p/b", b"2").unwrap();
        store.insert(b"p/c", b"3").unwrap();
        store
    }

    #[test]
    fn test_reads_fall_through_and_writes_are_buffered() {
        let store = base();
        let mut overlay = StateOverlay::new(&store);
        assert!(overlay.is_empty());
        overlay.insert(b"p/a", b"10").unwrap();
        overlay.delete(b"p/b").unwrap();

        assert_eq!(overlay.get(b"p/a").unwrap(), Some(b"10".to_vec()));
        assert_eq!(overlay.get(b"p/b").unwrap(), None);
        assert_eq!(overlay.get(b"p/c").unwrap(), Some(b"3".to_vec()));
        // The base is untouched until the batch is applied.
        assert_eq!(store.get(b"p/a").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn test_merged_scan() {
        let store = base();
        let mut overlay = StateOverlay::new(&store);
        overlay.delete(b"p/b").unwrap();
        overlay.insert(b"p/bb", b"22").unwrap();
        overlay.insert(b"p/c", b"30").unwrap();
        overlay.insert(b"q/x", b"0").unwrap();

        let entries: Vec<(Vec<u8>, Vec<u8>)> = overlay
            .prefix_scan(b"p/")
            .unwrap()
            .map(|r| {
                let (k, v) = r.unwrap();
                (k.to_vec(), v.to_vec())
            })
            .collect();
        assert_eq!(
            entries,
            vec![
                (b"p/a".to_vec(), b"1".to_vec()),
                (b"p/bb".to_vec(), b"22".to_vec()),
                (b"p/c".to_vec(), b"30".to_vec()),
            ]
        );
    }

    #[test]
    fn test_ordered_batch_commits() {
        let mut store = base();
        let (inserts, deletes) = {
            let mut overlay = StateOverlay::new(&store);
            overlay.insert(b"p/z", b"26").unwrap();
            overlay.insert(b"p/d", b"4").unwrap();
            overlay.delete(b"p/a").unwrap();
            overlay.into_ordered_batch()
        };
        assert_eq!(
            inserts,
            vec![
                (b"p/d".to_vec(), b"4".to_vec()),
                (b"p/z".to_vec(), b"26".to_vec())
            ]
        );
        assert_eq!(deletes, vec![b"p/a".to_vec()]);

        store.batch_apply(&inserts, &deletes).unwrap();
        assert_eq!(store.get(b"p/a").unwrap(), None);
        assert_eq!(store.get(b"p/z").unwrap(), Some(b"26".to_vec()));
    }

    proptest! {
        // A merged scan over base and overlay matches the base with the writes applied.
        #[test]
        fn merged_scan_matches_model(
            seed in prop::collection::btree_map(prop::collection::vec(0u8..4, 1..3), any::<u8>(), 0..8),
            ops in prop::collection::vec((prop::collection::vec(0u8..4, 1..3), prop::option::of(any::<u8>())), 0..12),
        ) {
            let mut store = MemoryStore::new();
            for (k, v) in &seed {
                store.insert(k, &[*v]).unwrap();
            }
            let mut model: BTreeMap<Vec<u8>, Vec<u8>> =
                seed.iter().map(|(k, v)| (k.clone(), vec![*v])).collect();

            let mut overlay = StateOverlay::new(&store);
            for (k, v) in &ops {
                match v {
                    Some(v) => {
                        overlay.insert(k, &[*v]).unwrap();
                        model.insert(k.clone(), vec![*v]);
                    }
                    None => {
                        overlay.delete(k).unwrap();
                        model.remove(k);
                    }
                }
            }

            let scanned: Vec<(Vec<u8>, Vec<u8>)> = overlay
                .prefix_scan(b"")
                .unwrap()
                .map(|r| {
                    let (k, v) = r.unwrap();
                    (k.to_vec(), v.to_vec())
                })
                .collect();
            let expected: Vec<(Vec<u8>, Vec<u8>)> = model.into_iter().collect();
            prop_assert_eq!(scanned, expected);
        }
    }
}
