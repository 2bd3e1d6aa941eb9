//! Asset type definitions.
//!
//! An [`AssetInfo`] names a fungible asset on this chain: either a native
//! coin (by denom) or a CW20 token (by contract address). The bridge keys
//! its custody ledger by [`AssetInfo::id`].

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

/// A fungible asset on this chain.
#[cw_serde]
pub enum AssetInfo {
    /// Native coin identified by its denom
    Native { denom: String },
    /// CW20 token identified by its contract address
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// Canonical identifier used as the ledger/storage key.
    pub fn id(&self) -> String {
        match self {
            AssetInfo::Native { denom } => denom.clone(),
            AssetInfo::Cw20 { contract_addr } => contract_addr.to_string(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }

    /// Validate any embedded address.
    pub fn validate(&self, api: &dyn Api) -> StdResult<()> {
        match self {
            AssetInfo::Native { .. } => Ok(()),
            AssetInfo::Cw20 { contract_addr } => {
                api.addr_validate(contract_addr.as_str())?;
                Ok(())
            }
        }
    }

    /// Build the message transferring `amount` of this asset to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        match self {
            AssetInfo::Native { denom } => Ok(CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount,
                }],
            })),
            AssetInfo::Cw20 { contract_addr } => Ok(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_id_is_denom() {
        let asset = AssetInfo::Native {
            denom: "uluna".to_string(),
        };
        assert_eq!(asset.id(), "uluna");
        assert!(asset.is_native());
    }

    #[test]
    fn cw20_id_is_contract_address() {
        let asset = AssetInfo::Cw20 {
            contract_addr: Addr::unchecked("terra1token"),
        };
        assert_eq!(asset.id(), "terra1token");
        assert!(!asset.is_native());
    }

    #[test]
    fn native_transfer_is_bank_send() {
        let asset = AssetInfo::Native {
            denom: "uluna".to_string(),
        };
        let msg = asset
            .transfer_msg(&Addr::unchecked("terra1recipient"), Uint128::new(500))
            .unwrap();
        match msg {
            CosmosMsg::Bank(BankMsg::Send { to_address, amount }) => {
                assert_eq!(to_address, "terra1recipient");
                assert_eq!(amount, vec![Coin::new(500, "uluna")]);
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn cw20_transfer_is_wasm_execute() {
        let asset = AssetInfo::Cw20 {
            contract_addr: Addr::unchecked("terra1token"),
        };
        let msg = asset
            .transfer_msg(&Addr::unchecked("terra1recipient"), Uint128::new(500))
            .unwrap();
        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute { contract_addr, .. }) => {
                assert_eq!(contract_addr, "terra1token");
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
