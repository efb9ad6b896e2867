// Path: crates/params/src/migrations.rs

use crate::key_table::KeyTable;
use crate::param_set::ParamSet;
use crate::subspace::Subspace;
use ioi_api::context::ExecContext;
use ioi_types::error::ParamError;

/// Reads a module's parameters from its legacy subspace so the module can move them
/// into its own state.
///
/// The key table built from `P` is attached only when the subspace does not have
/// one yet, so this is safe to call whether or not the module still wires its
/// legacy table at startup. Returns `None` when none of the keys hold a value; if
/// some do, every key must.
pub fn migrate_legacy_params<P: ParamSet + Default>(
    ctx: &ExecContext<'_>,
    legacy: &Subspace,
) -> Result<Option<P>, ParamError> {
    let space = if legacy.has_key_table() {
        legacy.clone()
    } else {
        legacy.with_key_table(KeyTable::from_param_set::<P>()?)?
    };

    let mut params = P::default();
    if space.get_param_set_if_exists(ctx, &mut params)? == 0 {
        tracing::debug!(target: "params", subspace = space.name(), "no legacy params to migrate");
        return Ok(None);
    }
    space.get_param_set(ctx, &mut params)?;
    tracing::info!(target: "params", subspace = space.name(), "read legacy params for migration");
    Ok(Some(params))
}
