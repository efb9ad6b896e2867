// Path: crates/api/src/context/mod.rs

//! The execution context threaded through every parameter store operation.

use crate::state::{StateAccess, StateOverlay};
use ioi_types::error::StateError;

/// Gives a subspace access to the persistent and transient stores of the block
/// currently being executed.
///
/// The host builds one context per block (or per transaction) and passes it to
/// every getter, setter and handler. Contexts are not shared across threads.
pub struct ExecContext<'a> {
    /// The persistent, replicated parameter store.
    pub state: &'a mut dyn StateAccess,
    /// The per-block store recording which keys were modified. The host clears it
    /// at every block boundary.
    pub transient: &'a mut dyn StateAccess,
    /// The height of the block being executed.
    pub block_height: u64,
}

impl<'a> ExecContext<'a> {
    /// Creates a new context over the given stores.
    pub fn new(
        state: &'a mut dyn StateAccess,
        transient: &'a mut dyn StateAccess,
        block_height: u64,
    ) -> Self {
        Self {
            state,
            transient,
            block_height,
        }
    }

    /// Runs `f` against copy-on-write overlays of both stores.
    ///
    /// Writes made inside `f` reach the underlying stores only if `f` returns `Ok`.
    /// On `Err` the overlays are dropped and neither store is touched. Scopes nest:
    /// an inner scope commits into the outer scope's overlays.
    ///
    /// The transient batch is applied before the persistent one, so a transient store
    /// that fails on commit never leaves a persistent write without its marker.
    pub fn atomic<T, E, F>(&mut self, f: F) -> Result<T, E>
    where
        E: From<StateError>,
        F: FnOnce(&mut ExecContext<'_>) -> Result<T, E>,
    {
        let (value, state_batch, transient_batch) = {
            let mut state = StateOverlay::new(&*self.state);
            let mut transient = StateOverlay::new(&*self.transient);
            let value = {
                let mut scoped = ExecContext {
                    state: &mut state,
                    transient: &mut transient,
                    block_height: self.block_height,
                };
                f(&mut scoped)?
            };
            (
                value,
                state.into_ordered_batch(),
                transient.into_ordered_batch(),
            )
        };

        // Markers go first: a failed transient apply must leave the persistent store
        // untouched.
        let (t_inserts, t_deletes) = transient_batch;
        self.transient.batch_apply(&t_inserts, &t_deletes)?;
        let (inserts, deletes) = state_batch;
        self.state.batch_apply(&inserts, &deletes)?;
        tracing::debug!(
            target: "state",
            height = self.block_height,
            writes = inserts.len() + deletes.len(),
            "committed atomic scope"
        );
        Ok(value)
    }
}
