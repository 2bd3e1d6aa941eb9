//! Administrative operations handlers (owner-gated).
//!
//! This module handles:
//! - Wrapped-asset registration (CW20 factory + reply)
//! - Validator key rotation
//! - Emergency withdrawal of custodied assets to the owner
//! - Per-asset minimum bridge amounts

use common::AssetInfo;
use cosmwasm_std::{
    to_json_binary, DepsMut, Env, MessageInfo, Reply, Response, StdError, SubMsg, Uint128, WasmMsg,
};
use cw20::MinterResponse;

use crate::error::ContractError;
use crate::execute::parse_foreign_bytes32;
use crate::hash::{bytes32_to_hex, hex_to_address20};
use crate::ledger;
use crate::state::{
    PendingWrapped, CONFIG, FOREIGN_BY_WRAPPED, MIN_AMOUNTS, PENDING_WRAPPED,
    REGISTER_WRAPPED_REPLY_ID, WRAPPED_BY_FOREIGN,
};

// ============================================================================
// Wrapped Asset Registration
// ============================================================================

/// Register a wrapped asset for a foreign-chain asset id.
///
/// Instantiates a fresh CW20 token with this contract as the sole minter.
/// The mapping is recorded in the reply handler once the token address is
/// known, so both directions are written together.
pub fn execute_register_wrapped(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    foreign_id: String,
    name: String,
    symbol: String,
    decimals: u8,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let foreign = parse_foreign_bytes32(&foreign_id)?;
    if WRAPPED_BY_FOREIGN.has(deps.storage, &foreign) {
        return Err(ContractError::AlreadyRegistered { foreign_id });
    }

    PENDING_WRAPPED.save(
        deps.storage,
        &PendingWrapped {
            foreign_id: foreign,
            symbol: symbol.clone(),
        },
    )?;

    let instantiate = WasmMsg::Instantiate {
        admin: None,
        code_id: config.cw20_code_id,
        msg: to_json_binary(&cw20_base::msg::InstantiateMsg {
            name,
            symbol: symbol.clone(),
            decimals,
            initial_balances: vec![],
            mint: Some(MinterResponse {
                minter: env.contract.address.to_string(),
                cap: None,
            }),
            marketing: None,
        })?,
        funds: vec![],
        label: format!("wrapped-{symbol}"),
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            instantiate,
            REGISTER_WRAPPED_REPLY_ID,
        ))
        .add_attribute("action", "register_wrapped")
        .add_attribute("foreign_asset", bytes32_to_hex(&foreign))
        .add_attribute("symbol", symbol))
}

/// Reply handler for the wrapped-token instantiate submessage.
///
/// Records both mapping directions for the freshly instantiated token.
pub fn reply_register_wrapped(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let pending = PENDING_WRAPPED
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::generic_err("no wrapped registration in flight"))?;
    PENDING_WRAPPED.remove(deps.storage);

    let result = msg
        .result
        .into_result()
        .map_err(StdError::generic_err)?;
    let address = result
        .events
        .iter()
        .find(|event| event.ty == "instantiate")
        .and_then(|event| {
            event
                .attributes
                .iter()
                .find(|attr| attr.key == "_contract_address")
        })
        .map(|attr| attr.value.clone())
        .ok_or_else(|| StdError::generic_err("wrapped token address missing from reply"))?;
    let wrapped = deps.api.addr_validate(&address)?;

    WRAPPED_BY_FOREIGN.save(deps.storage, &pending.foreign_id, &wrapped)?;
    FOREIGN_BY_WRAPPED.save(deps.storage, &wrapped, &pending.foreign_id)?;

    Ok(Response::new()
        .add_attribute("action", "register_wrapped_reply")
        .add_attribute("foreign_asset", bytes32_to_hex(&pending.foreign_id))
        .add_attribute("wrapped_asset", wrapped))
}

// ============================================================================
// Validator Rotation
// ============================================================================

/// Rotate the validator key trusted to authorize inbound instructions.
pub fn execute_update_validator(
    deps: DepsMut,
    info: MessageInfo,
    validator: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let new_validator =
        hex_to_address20(&validator).map_err(|e| ContractError::InvalidAddress {
            reason: e.to_string(),
        })?;
    if new_validator == [0u8; 20] {
        return Err(ContractError::InvalidAddress {
            reason: "validator address must not be zero".to_string(),
        });
    }

    config.validator = new_validator;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_validator")
        .add_attribute("validator", format!("0x{}", hex::encode(new_validator))))
}

// ============================================================================
// Emergency Withdrawal
// ============================================================================

/// Withdraw custodied assets to the owner without a validator signature.
///
/// The ledger is debited like a normal release so custody bookkeeping stays
/// consistent with the transferred funds.
pub fn execute_emergency_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    asset.validate(deps.api)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    ledger::debit(deps.storage, &asset.id(), amount)?;
    let transfer = asset.transfer_msg(&config.owner, amount)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "emergency_withdraw")
        .add_attribute("asset", asset.id())
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", config.owner))
}

// ============================================================================
// Per-Asset Minimums
// ============================================================================

/// Set a per-asset minimum bridge amount, overriding the config default.
pub fn execute_set_min_amount(
    deps: DepsMut,
    info: MessageInfo,
    asset: AssetInfo,
    min_amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    asset.validate(deps.api)?;
    MIN_AMOUNTS.save(deps.storage, asset.id(), &min_amount)?;

    Ok(Response::new()
        .add_attribute("action", "set_min_amount")
        .add_attribute("asset", asset.id())
        .add_attribute("min_amount", min_amount.to_string()))
}
