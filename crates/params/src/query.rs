// Path: crates/params/src/query.rs

use crate::keeper::Keeper;
use ioi_api::context::ExecContext;
use ioi_types::app::{
    QueryParamsRequest, QueryParamsResponse, QuerySubspacesRequest, QuerySubspacesResponse,
    SubspaceKeys,
};
use ioi_types::error::QueryError;
use ioi_types::prelude::OptionExt;

/// Serves read-only queries over the keeper's subspaces.
#[derive(Debug, Clone, Copy)]
pub struct Querier<'k> {
    keeper: &'k Keeper,
}

impl<'k> Querier<'k> {
    /// Creates a querier over the subspaces of `keeper`.
    pub fn new(keeper: &'k Keeper) -> Self {
        Self { keeper }
    }

    /// Returns the stored bytes of one parameter, or an empty value when nothing has
    /// been written.
    pub fn params(
        &self,
        ctx: &ExecContext<'_>,
        req: &QueryParamsRequest,
    ) -> Result<QueryParamsResponse, QueryError> {
        if req.subspace.is_empty() {
            return Err(QueryError::InvalidArgument(
                "subspace must not be empty".to_string(),
            ));
        }
        if req.key.is_empty() {
            return Err(QueryError::InvalidArgument("key must not be empty".to_string()));
        }
        let space = self
            .keeper
            .get_subspace(&req.subspace)
            .required_with(|| QueryError::UnknownSubspace(req.subspace.clone()))?;
        let raw = space.get_raw(ctx, req.key.as_bytes())?;
        let value = String::from_utf8(raw).map_err(|e| QueryError::InvalidValue(e.to_string()))?;
        Ok(QueryParamsResponse {
            subspace: req.subspace.clone(),
            key: req.key.clone(),
            value,
        })
    }

    /// Lists every subspace with the keys that currently hold a value.
    pub fn subspaces(
        &self,
        ctx: &ExecContext<'_>,
        _req: &QuerySubspacesRequest,
    ) -> Result<QuerySubspacesResponse, QueryError> {
        let mut subspaces = Vec::new();
        for space in self.keeper.get_subspaces() {
            subspaces.push(SubspaceKeys {
                subspace: space.name().to_string(),
                keys: space.keys(ctx)?,
            });
        }
        Ok(QuerySubspacesResponse { subspaces })
    }
}
