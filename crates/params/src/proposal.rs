// Path: crates/params/src/proposal.rs
//! Applies parameter change proposals decided by governance.

use crate::keeper::Keeper;
use ioi_api::context::ExecContext;
use ioi_telemetry::sinks::{error_metrics, params_metrics};
use ioi_telemetry::time::Timer;
use ioi_types::app::{ParameterChangeProposal, PROPOSAL_ROUTE};
use ioi_types::codec;
use ioi_types::error::{ErrorCode, ProposalError};
use ioi_types::prelude::OptionExt;

/// Routes parameter change proposals to the subspaces they name.
///
/// A proposal is validated first; nothing is touched if validation fails. The
/// changes are then applied in declared order inside an atomic scope of the
/// execution context, so either every change lands or none does.
#[derive(Debug, Clone, Copy)]
pub struct ParamChangeProposalHandler<'k> {
    keeper: &'k Keeper,
}

impl<'k> ParamChangeProposalHandler<'k> {
    /// Creates a handler over the subspaces of `keeper`.
    pub fn new(keeper: &'k Keeper) -> Self {
        Self { keeper }
    }

    /// The router key this handler serves.
    pub fn route(&self) -> &'static str {
        PROPOSAL_ROUTE
    }

    /// Validates and applies `proposal`.
    pub fn handle(
        &self,
        ctx: &mut ExecContext<'_>,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        let _timer = Timer::new(params_metrics());
        let result = self.apply(ctx, proposal);
        match &result {
            Ok(()) => params_metrics().inc_proposals("applied"),
            Err(e) => {
                params_metrics().inc_proposals("rejected");
                error_metrics().inc_error("proposal", e.code());
                tracing::warn!(
                    target: "params",
                    title = %proposal.title,
                    height = ctx.block_height,
                    code = e.code(),
                    error = %e,
                    "rejected parameter change proposal"
                );
            }
        }
        result
    }

    /// Decodes a SCALE-encoded [`ParameterChangeProposal`] and handles it.
    pub fn handle_encoded(
        &self,
        ctx: &mut ExecContext<'_>,
        bytes: &[u8],
    ) -> Result<(), ProposalError> {
        let proposal: ParameterChangeProposal =
            codec::from_bytes_canonical(bytes).map_err(ProposalError::Decode)?;
        self.handle(ctx, &proposal)
    }

    fn apply(
        &self,
        ctx: &mut ExecContext<'_>,
        proposal: &ParameterChangeProposal,
    ) -> Result<(), ProposalError> {
        proposal.validate_basic(&self.keeper.config().proposal_limits)?;

        let applied = ctx.atomic(|scoped| -> Result<_, ProposalError> {
            let mut applied = Vec::with_capacity(proposal.changes.len());
            for change in &proposal.changes {
                let space = self
                    .keeper
                    .get_subspace(&change.subspace)
                    .required_with(|| ProposalError::UnknownSubspace(change.subspace.clone()))?;
                let written = space
                    .update(scoped, change.key.as_bytes(), &change.value)
                    .map_err(|source| ProposalError::SettingParameter {
                        subspace: change.subspace.clone(),
                        key: change.key.clone(),
                        source,
                    })?;
                applied.push((change, written));
            }
            Ok(applied)
        })?;

        // Only changes that were committed are logged.
        for (change, written) in applied {
            params_metrics().inc_param_updates(&change.subspace);
            tracing::info!(
                target: "params",
                subspace = %change.subspace,
                key = %change.key,
                value = %String::from_utf8_lossy(&written),
                height = ctx.block_height,
                "attempt to set new parameter value"
            );
        }
        Ok(())
    }
}
