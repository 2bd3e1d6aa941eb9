//! Message types for the Guardian Bridge contract.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for administrative operations
    pub owner: String,
    /// 20-byte hex address of the validator trusted to sign inbound
    /// unlock/mint authorizations (e.g. "0x1234...")
    pub validator: String,
    /// Default minimum bridge amount (in smallest unit)
    pub min_bridge_amount: Uint128,
    /// Code id used to instantiate wrapped CW20 tokens
    pub cw20_code_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Outgoing (user-callable)
    // ========================================================================
    /// Lock native tokens into bridge custody for release on the counterparty
    /// chain. The locked asset and amount are taken from the attached funds.
    ///
    /// Authorization: Anyone
    Lock {
        /// Recipient account on the counterparty chain (32-byte hex)
        foreign_recipient: String,
    },

    /// CW20 receiver entry point. Locks sent collateral tokens (see
    /// [`ReceiveMsg::Lock`]) or burns sent wrapped tokens
    /// (see [`ReceiveMsg::Burn`]).
    Receive(cw20::Cw20ReceiveMsg),

    // ========================================================================
    // Incoming (relayer-callable, validator-authorized)
    // ========================================================================
    /// Release custodied assets to a local recipient.
    ///
    /// Authorization: validator signature over
    /// (asset, amount, recipient, nonce, "unlock")
    Unlock {
        /// Asset to release
        asset: AssetInfo,
        /// Amount to release (must be positive)
        amount: Uint128,
        /// Local recipient address
        recipient: String,
        /// One-time nonce chosen by the counterparty system
        nonce: u64,
        /// 65-byte r||s||v validator signature
        signature: Binary,
    },

    /// Mint wrapped tokens to a local recipient.
    ///
    /// Authorization: validator signature over
    /// (wrapped_asset, amount, recipient, foreign_id, nonce, "mint")
    MintWrapped {
        /// Wrapped CW20 address; must match the registered mapping for
        /// `foreign_id`
        wrapped_asset: String,
        /// Amount to mint
        amount: Uint128,
        /// Local recipient address
        recipient: String,
        /// Foreign-chain asset identifier (32-byte hex)
        foreign_id: String,
        /// One-time nonce chosen by the counterparty system
        nonce: u64,
        /// 65-byte r||s||v validator signature
        signature: Binary,
    },

    // ========================================================================
    // Administrative (owner only)
    // ========================================================================
    /// Register a wrapped asset for a foreign-chain asset id. Instantiates a
    /// fresh CW20 token with this contract as sole minter and records the
    /// mapping in both directions.
    ///
    /// Authorization: Owner only
    RegisterWrapped {
        /// Foreign-chain asset identifier (32-byte hex)
        foreign_id: String,
        /// Token name for the new CW20
        name: String,
        /// Token symbol for the new CW20
        symbol: String,
        /// Token decimals for the new CW20
        decimals: u8,
    },

    /// Rotate the validator key.
    ///
    /// Authorization: Owner only
    UpdateValidator {
        /// 20-byte hex address of the new validator (must not be zero)
        validator: String,
    },

    /// Withdraw custodied assets to the owner, bypassing the validator
    /// signature path. Unilateral escape hatch, not a bridging path.
    ///
    /// Authorization: Owner only
    EmergencyWithdraw {
        /// Asset to withdraw
        asset: AssetInfo,
        /// Amount to withdraw
        amount: Uint128,
    },

    /// Set a per-asset minimum bridge amount, overriding the config default.
    ///
    /// Authorization: Owner only
    SetMinAmount {
        /// Asset to configure
        asset: AssetInfo,
        /// Minimum amount for lock/mint/burn of this asset
        min_amount: Uint128,
    },
}

/// Hook messages carried inside a CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the sent tokens into bridge custody
    Lock {
        /// Recipient account on the counterparty chain (32-byte hex)
        foreign_recipient: String,
    },
    /// Burn the sent wrapped tokens, releasing the foreign original
    Burn {
        /// Recipient account on the counterparty chain (32-byte hex)
        foreign_recipient: String,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Custodied balance for an asset
    #[returns(LockedBalanceResponse)]
    LockedBalance { asset: AssetInfo },

    /// Whether an inbound nonce has been consumed
    #[returns(NonceUsedResponse)]
    NonceUsed { nonce: u64 },

    /// Current outbound sequence counter
    #[returns(SequenceResponse)]
    Sequence {},

    /// Wrapped asset registered for a foreign id
    #[returns(WrappedAssetResponse)]
    WrappedAsset { foreign_id: String },

    /// Foreign id registered for a wrapped asset
    #[returns(WrappedAssetResponse)]
    ForeignId { wrapped_asset: String },

    /// Enumerate registered wrapped assets
    #[returns(WrappedAssetsResponse)]
    WrappedAssets {
        /// Foreign id (32-byte hex) to start after
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Effective minimum bridge amount for an asset
    #[returns(MinAmountResponse)]
    MinAmount { asset: AssetInfo },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    /// Validator address as 20-byte hex
    pub validator: String,
    pub min_bridge_amount: Uint128,
    pub cw20_code_id: u64,
}

#[cw_serde]
pub struct LockedBalanceResponse {
    pub asset: String,
    pub amount: Uint128,
}

#[cw_serde]
pub struct NonceUsedResponse {
    pub nonce: u64,
    pub used: bool,
}

#[cw_serde]
pub struct SequenceResponse {
    pub sequence: u64,
}

#[cw_serde]
pub struct WrappedAssetResponse {
    /// Foreign-chain asset identifier (32-byte hex)
    pub foreign_id: String,
    /// Wrapped CW20 address
    pub wrapped_asset: Addr,
}

#[cw_serde]
pub struct WrappedAssetsResponse {
    pub entries: Vec<WrappedAssetResponse>,
}

#[cw_serde]
pub struct MinAmountResponse {
    pub asset: String,
    pub min_amount: Uint128,
}
