//! Incoming transfer handlers (Unlock and MintWrapped).
//!
//! Both operations are relayer-submitted and authorized solely by the
//! validator's signature over the instruction fields plus a one-time nonce.
//! The nonce is consumed first; the whole message reverts on any later
//! failure, so a failed instruction never burns its nonce.

use common::AssetInfo;
use cosmwasm_std::{
    to_json_binary, Binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::execute::parse_foreign_bytes32;
use crate::hash::{bytes32_to_hex, encode_address, encode_asset_key};
use crate::state::{min_amount, CONFIG, WRAPPED_BY_FOREIGN};
use crate::{ledger, replay, verify};

/// Release custodied assets to a local recipient on validator authorization.
pub fn execute_unlock(
    deps: DepsMut,
    _info: MessageInfo,
    asset: AssetInfo,
    amount: Uint128,
    recipient: String,
    nonce: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    asset.validate(deps.api)?;
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    replay::consume_nonce(deps.storage, nonce)?;

    let asset_key = encode_asset_key(deps.as_ref(), &asset)?;
    let recipient_key = encode_address(deps.as_ref(), &recipient_addr)?;
    let message = verify::unlock_message(&asset_key, amount.u128(), &recipient_key, nonce);
    verify::assert_validator(deps.as_ref(), &message, signature.as_slice(), &config.validator)?;

    // Bookkeeping before the outbound transfer message
    ledger::debit(deps.storage, &asset.id(), amount)?;
    let transfer = asset.transfer_msg(&recipient_addr, amount)?;

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "unlock")
        .add_attribute("asset", asset.id())
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", recipient_addr)
        .add_attribute("nonce", nonce.to_string()))
}

/// Mint wrapped tokens to a local recipient on validator authorization.
pub fn execute_mint_wrapped(
    deps: DepsMut,
    _info: MessageInfo,
    wrapped_asset: String,
    amount: Uint128,
    recipient: String,
    foreign_id: String,
    nonce: u64,
    signature: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let foreign = parse_foreign_bytes32(&foreign_id)?;
    let wrapped_addr = deps.api.addr_validate(&wrapped_asset)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    let min = min_amount(deps.storage, &config, wrapped_addr.as_str())?;
    if amount < min {
        return Err(ContractError::BelowMinimumAmount { min_amount: min });
    }

    replay::consume_nonce(deps.storage, nonce)?;

    // The claimed wrapped asset must match the registered mapping exactly
    let registered = WRAPPED_BY_FOREIGN
        .may_load(deps.storage, &foreign)?
        .ok_or_else(|| ContractError::UnknownAsset {
            asset: foreign_id.clone(),
        })?;
    if registered != wrapped_addr {
        return Err(ContractError::WrappedAssetMismatch {
            expected: registered.to_string(),
            got: wrapped_asset,
        });
    }

    let wrapped_key = encode_address(deps.as_ref(), &wrapped_addr)?;
    let recipient_key = encode_address(deps.as_ref(), &recipient_addr)?;
    let message =
        verify::mint_message(&wrapped_key, amount.u128(), &recipient_key, &foreign, nonce);
    verify::assert_validator(deps.as_ref(), &message, signature.as_slice(), &config.validator)?;

    let mint: CosmosMsg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: wrapped_addr.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: recipient_addr.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "mint_wrapped")
        .add_attribute("wrapped_asset", wrapped_addr)
        .add_attribute("foreign_asset", bytes32_to_hex(&foreign))
        .add_attribute("amount", amount.to_string())
        .add_attribute("recipient", recipient_addr)
        .add_attribute("nonce", nonce.to_string()))
}
