// Path: crates/params/src/keeper.rs

use crate::subspace::Subspace;
use ioi_types::config::ParamsConfig;
use ioi_types::error::RegistrationError;
use ioi_types::keys::SUBSPACE_SEPARATOR;
use std::collections::BTreeMap;

/// The directory of subspaces.
///
/// The keeper owns no parameter data; values live in the stores reached through the
/// execution context. Modules allocate their subspace once during wiring and keep
/// the returned handle.
#[derive(Debug, Default)]
pub struct Keeper {
    config: ParamsConfig,
    spaces: BTreeMap<String, Subspace>,
}

impl Keeper {
    /// Creates a keeper with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a keeper with the given configuration.
    pub fn with_config(config: ParamsConfig) -> Self {
        Self {
            config,
            spaces: BTreeMap::new(),
        }
    }

    /// The keeper's configuration, including the names of the backing stores the
    /// host must provide in every execution context.
    pub fn config(&self) -> &ParamsConfig {
        &self.config
    }

    /// Allocates the subspace `name`. Each name may be allocated once.
    pub fn subspace(&mut self, name: &str) -> Result<Subspace, RegistrationError> {
        if name.is_empty() {
            return Err(RegistrationError::EmptySubspaceName);
        }
        if name
            .as_bytes()
            .windows(SUBSPACE_SEPARATOR.len())
            .any(|w| w == SUBSPACE_SEPARATOR)
        {
            return Err(RegistrationError::InvalidSubspaceName(name.to_string()));
        }
        if self.spaces.contains_key(name) {
            return Err(RegistrationError::DuplicateSubspace(name.to_string()));
        }
        let space = Subspace::new(name);
        self.spaces.insert(name.to_string(), space.clone());
        tracing::debug!(target: "params", subspace = name, "allocated subspace");
        Ok(space)
    }

    /// Looks up a previously allocated subspace.
    pub fn get_subspace(&self, name: &str) -> Option<Subspace> {
        self.spaces.get(name).cloned()
    }

    /// Every allocated subspace, ordered by name.
    pub fn get_subspaces(&self) -> Vec<Subspace> {
        self.spaces.values().cloned().collect()
    }
}
