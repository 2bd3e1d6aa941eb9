//! Query handlers for the Guardian Bridge contract.

use common::AssetInfo;
use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::hash::hex_to_bytes32;
use crate::msg::{
    ConfigResponse, LockedBalanceResponse, MinAmountResponse, NonceUsedResponse, SequenceResponse,
    WrappedAssetResponse, WrappedAssetsResponse,
};
use crate::state::{
    min_amount, CONFIG, FOREIGN_BY_WRAPPED, OUTBOUND_SEQUENCE, WRAPPED_BY_FOREIGN,
};
use crate::{ledger, replay};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        validator: format!("0x{}", hex::encode(config.validator)),
        min_bridge_amount: config.min_bridge_amount,
        cw20_code_id: config.cw20_code_id,
    })
}

/// Query the custodied balance for an asset.
pub fn query_locked_balance(deps: Deps, asset: AssetInfo) -> StdResult<LockedBalanceResponse> {
    let amount = ledger::balance(deps.storage, &asset.id())?;
    Ok(LockedBalanceResponse {
        asset: asset.id(),
        amount,
    })
}

/// Query whether an inbound nonce has been consumed.
pub fn query_nonce_used(deps: Deps, nonce: u64) -> StdResult<NonceUsedResponse> {
    Ok(NonceUsedResponse {
        nonce,
        used: replay::nonce_used(deps.storage, nonce)?,
    })
}

/// Query the current outbound sequence counter.
pub fn query_sequence(deps: Deps) -> StdResult<SequenceResponse> {
    Ok(SequenceResponse {
        sequence: OUTBOUND_SEQUENCE.load(deps.storage)?,
    })
}

/// Query the wrapped asset registered for a foreign id.
pub fn query_wrapped_asset(deps: Deps, foreign_id: String) -> StdResult<WrappedAssetResponse> {
    let foreign = hex_to_bytes32(&foreign_id).map_err(StdError::generic_err)?;
    let wrapped = WRAPPED_BY_FOREIGN
        .may_load(deps.storage, &foreign)?
        .ok_or_else(|| StdError::not_found("wrapped asset"))?;
    Ok(WrappedAssetResponse {
        foreign_id,
        wrapped_asset: wrapped,
    })
}

/// Query the foreign id registered for a wrapped asset.
pub fn query_foreign_id(deps: Deps, wrapped_asset: String) -> StdResult<WrappedAssetResponse> {
    let wrapped = deps.api.addr_validate(&wrapped_asset)?;
    let foreign = FOREIGN_BY_WRAPPED
        .may_load(deps.storage, &wrapped)?
        .ok_or_else(|| StdError::not_found("foreign id"))?;
    Ok(WrappedAssetResponse {
        foreign_id: format!("0x{}", hex::encode(foreign)),
        wrapped_asset: wrapped,
    })
}

/// Enumerate registered wrapped assets, paginated by foreign id.
pub fn query_wrapped_assets(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<WrappedAssetsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after
        .map(|s| hex_to_bytes32(&s).map_err(StdError::generic_err))
        .transpose()?;
    let start_bound = start.as_ref().map(|s| Bound::exclusive(s.as_slice()));

    let entries = WRAPPED_BY_FOREIGN
        .range(deps.storage, start_bound, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (foreign, wrapped) = item?;
            Ok(WrappedAssetResponse {
                foreign_id: format!("0x{}", hex::encode(foreign)),
                wrapped_asset: wrapped,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(WrappedAssetsResponse { entries })
}

/// Query the effective minimum bridge amount for an asset.
pub fn query_min_amount(deps: Deps, asset: AssetInfo) -> StdResult<MinAmountResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(MinAmountResponse {
        asset: asset.id(),
        min_amount: min_amount(deps.storage, &config, &asset.id())?,
    })
}
