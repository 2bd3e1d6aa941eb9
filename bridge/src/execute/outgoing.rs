//! Outgoing transfer handlers (Lock and Receive).
//!
//! Locks move collateral into bridge custody; burns destroy wrapped tokens
//! sent back to the bridge. Both draw an outbound sequence number used as an
//! audit tag in the emitted event; there is no replay guard on this side
//! because outbound actions are user-initiated.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::execute::parse_foreign_bytes32;
use crate::hash::bytes32_to_hex;
use crate::msg::ReceiveMsg;
use crate::state::{min_amount, CONFIG, FOREIGN_BY_WRAPPED};
use crate::{ledger, replay};

/// Execute handler for locking native tokens.
pub fn execute_lock(
    deps: DepsMut,
    info: MessageInfo,
    foreign_recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.funds.is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "no funds sent".to_string(),
        });
    }
    if info.funds.len() > 1 {
        return Err(ContractError::InvalidAmount {
            reason: "only one asset per lock".to_string(),
        });
    }

    let coin = &info.funds[0];
    let recipient = parse_foreign_bytes32(&foreign_recipient)?;

    let min = min_amount(deps.storage, &config, &coin.denom)?;
    if coin.amount < min {
        return Err(ContractError::BelowMinimumAmount { min_amount: min });
    }

    // Funds already arrived with the message; custody bookkeeping follows.
    ledger::credit(deps.storage, &coin.denom, coin.amount)?;
    let sequence = replay::next_sequence(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "lock")
        .add_attribute("sender", info.sender)
        .add_attribute("asset", coin.denom.clone())
        .add_attribute("amount", coin.amount.to_string())
        .add_attribute("foreign_recipient", bytes32_to_hex(&recipient))
        .add_attribute("sequence", sequence.to_string()))
}

/// Execute handler for CW20 tokens sent to the bridge.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    // The CW20 contract itself is the message sender
    let token = info.sender;
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;

    match from_json::<ReceiveMsg>(&cw20_msg.msg)? {
        ReceiveMsg::Lock { foreign_recipient } => {
            lock_cw20(deps, token, sender, cw20_msg.amount, foreign_recipient)
        }
        ReceiveMsg::Burn { foreign_recipient } => {
            burn_wrapped(deps, token, sender, cw20_msg.amount, foreign_recipient)
        }
    }
}

/// Lock received CW20 collateral into custody.
fn lock_cw20(
    deps: DepsMut,
    token: Addr,
    sender: Addr,
    amount: Uint128,
    foreign_recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let recipient = parse_foreign_bytes32(&foreign_recipient)?;

    let min = min_amount(deps.storage, &config, token.as_str())?;
    if amount < min {
        return Err(ContractError::BelowMinimumAmount { min_amount: min });
    }

    ledger::credit(deps.storage, token.as_str(), amount)?;
    let sequence = replay::next_sequence(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "lock")
        .add_attribute("sender", sender)
        .add_attribute("asset", token)
        .add_attribute("amount", amount.to_string())
        .add_attribute("foreign_recipient", bytes32_to_hex(&recipient))
        .add_attribute("sequence", sequence.to_string()))
}

/// Burn received wrapped tokens, releasing the original on the counterparty
/// chain. The sender's balance check happened in the CW20 contract during
/// the send; the received units are destroyed here.
fn burn_wrapped(
    deps: DepsMut,
    token: Addr,
    sender: Addr,
    amount: Uint128,
    foreign_recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let foreign_id = FOREIGN_BY_WRAPPED
        .may_load(deps.storage, &token)?
        .ok_or_else(|| ContractError::NotAWrappedAsset {
            token: token.to_string(),
        })?;

    let recipient = parse_foreign_bytes32(&foreign_recipient)?;

    let min = min_amount(deps.storage, &config, token.as_str())?;
    if amount < min {
        return Err(ContractError::BelowMinimumAmount { min_amount: min });
    }

    let sequence = replay::next_sequence(deps.storage)?;

    // Destroy the units this contract just received
    let burn: CosmosMsg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(burn)
        .add_attribute("action", "burn_wrapped")
        .add_attribute("sender", sender)
        .add_attribute("wrapped_asset", token)
        .add_attribute("foreign_asset", bytes32_to_hex(&foreign_id))
        .add_attribute("amount", amount.to_string())
        .add_attribute("foreign_recipient", bytes32_to_hex(&recipient))
        .add_attribute("sequence", sequence.to_string()))
}
