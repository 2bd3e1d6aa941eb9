//! Guardian Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `ledger`, `replay`, `verify` - custody bookkeeping, replay guard, and
//!   validator signature verification

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_emergency_withdraw, execute_lock, execute_mint_wrapped, execute_receive,
    execute_register_wrapped, execute_set_min_amount, execute_unlock, execute_update_validator,
    reply_register_wrapped,
};
use crate::hash::hex_to_address20;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_foreign_id, query_locked_balance, query_min_amount, query_nonce_used,
    query_sequence, query_wrapped_asset, query_wrapped_assets,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTBOUND_SEQUENCE,
    REGISTER_WRAPPED_REPLY_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;

    let validator =
        hex_to_address20(&msg.validator).map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    if validator == [0u8; 20] {
        return Err(ContractError::InvalidAddress {
            reason: "validator address must not be zero".to_string(),
        });
    }

    let config = Config {
        owner,
        validator,
        min_bridge_amount: msg.min_bridge_amount,
        cw20_code_id: msg.cw20_code_id,
    };
    CONFIG.save(deps.storage, &config)?;

    OUTBOUND_SEQUENCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("validator", format!("0x{}", hex::encode(validator)))
        .add_attribute("min_bridge_amount", msg.min_bridge_amount.to_string())
        .add_attribute("cw20_code_id", msg.cw20_code_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Outgoing
        ExecuteMsg::Lock { foreign_recipient } => execute_lock(deps, info, foreign_recipient),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),

        // Incoming (validator-authorized)
        ExecuteMsg::Unlock {
            asset,
            amount,
            recipient,
            nonce,
            signature,
        } => execute_unlock(deps, info, asset, amount, recipient, nonce, signature),
        ExecuteMsg::MintWrapped {
            wrapped_asset,
            amount,
            recipient,
            foreign_id,
            nonce,
            signature,
        } => execute_mint_wrapped(
            deps,
            info,
            wrapped_asset,
            amount,
            recipient,
            foreign_id,
            nonce,
            signature,
        ),

        // Administrative
        ExecuteMsg::RegisterWrapped {
            foreign_id,
            name,
            symbol,
            decimals,
        } => execute_register_wrapped(deps, env, info, foreign_id, name, symbol, decimals),
        ExecuteMsg::UpdateValidator { validator } => {
            execute_update_validator(deps, info, validator)
        }
        ExecuteMsg::EmergencyWithdraw { asset, amount } => {
            execute_emergency_withdraw(deps, info, asset, amount)
        }
        ExecuteMsg::SetMinAmount { asset, min_amount } => {
            execute_set_min_amount(deps, info, asset, min_amount)
        }
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REGISTER_WRAPPED_REPLY_ID => reply_register_wrapped(deps, msg),
        id => Err(StdError::generic_err(format!("unknown reply id: {id}")).into()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::LockedBalance { asset } => to_json_binary(&query_locked_balance(deps, asset)?),
        QueryMsg::NonceUsed { nonce } => to_json_binary(&query_nonce_used(deps, nonce)?),
        QueryMsg::Sequence {} => to_json_binary(&query_sequence(deps)?),
        QueryMsg::WrappedAsset { foreign_id } => {
            to_json_binary(&query_wrapped_asset(deps, foreign_id)?)
        }
        QueryMsg::ForeignId { wrapped_asset } => {
            to_json_binary(&query_foreign_id(deps, wrapped_asset)?)
        }
        QueryMsg::WrappedAssets { start_after, limit } => {
            to_json_binary(&query_wrapped_assets(deps, start_after, limit)?)
        }
        QueryMsg::MinAmount { asset } => to_json_binary(&query_min_amount(deps, asset)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
